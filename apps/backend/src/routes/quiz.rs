//! Quiz endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/quiz
/// Parses a quiz transcript and makes it the active quiz
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuizRequest>,
) -> Json<QuizView> {
    let mut controller = state.controller.lock().await;
    Json(controller.generate_quiz(&request.transcript))
}

/// GET /api/quiz
pub async fn current(State(state): State<AppState>) -> Result<Json<QuizView>> {
    let controller = state.controller.lock().await;
    Ok(Json(controller.current_quiz()?))
}

/// PUT /api/quiz/answers
pub async fn select(
    State(state): State<AppState>,
    Json(request): Json<SelectAnswerRequest>,
) -> Result<Json<SelectAnswerResponse>> {
    let mut controller = state.controller.lock().await;
    Ok(Json(controller.select_answer(&request)?))
}

/// POST /api/quiz/submit
/// The body is optional; `quiz_id` guards against submitting a replaced quiz
pub async fn submit(
    State(state): State<AppState>,
    payload: Option<Json<SubmitQuizRequest>>,
) -> Result<Json<SubmitQuizResponse>> {
    let request = payload.map(|Json(p)| p).unwrap_or_default();
    let mut controller = state.controller.lock().await;
    Ok(Json(controller.submit_quiz(request.quiz_id)?))
}
