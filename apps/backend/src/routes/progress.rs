//! Progress endpoint

use axum::{extract::State, Json};

use crate::models::ProgressSnapshot;
use crate::AppState;

/// GET /api/progress
pub async fn get(State(state): State<AppState>) -> Json<ProgressSnapshot> {
    let controller = state.controller.lock().await;
    Json(controller.progress())
}
