//! Flashcard endpoint

use axum::{extract::State, Json};

use crate::models::{FlashcardsResponse, GenerateFlashcardsRequest};
use crate::AppState;

/// POST /api/flashcards
/// Parses a flashcard transcript into front/back pairs
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateFlashcardsRequest>,
) -> Json<FlashcardsResponse> {
    let mut controller = state.controller.lock().await;
    let response = controller.generate_flashcards(&request.transcript);

    tracing::info!("Parsed {} flashcards", response.total);

    Json(response)
}
