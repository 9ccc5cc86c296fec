//! Answer formatting endpoint

use axum::{extract::State, Json};

use crate::models::{FormatAnswerRequest, FormatAnswerResponse};
use crate::AppState;

/// POST /api/answers/format
pub async fn format(
    State(state): State<AppState>,
    Json(request): Json<FormatAnswerRequest>,
) -> Json<FormatAnswerResponse> {
    let mut controller = state.controller.lock().await;
    Json(controller.format_answer(&request.text))
}
