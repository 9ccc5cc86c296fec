//! Outline diagram endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{DiagramMode, OutlineDiagramRequest, OutlineDiagramResponse};
use crate::AppState;

/// POST /api/outline/diagram
pub async fn diagram(
    State(state): State<AppState>,
    Json(request): Json<OutlineDiagramRequest>,
) -> Result<Json<OutlineDiagramResponse>> {
    let mode = match request.mode.as_deref() {
        Some(name) => name.parse::<DiagramMode>()?,
        None => DiagramMode::default(),
    };

    let mut controller = state.controller.lock().await;
    Ok(Json(controller.outline_diagram(&request.outline, mode)))
}
