use std::sync::Arc;

use axum::{Json, extract::State};
use rowkeeper_model::{SetSelectionRequest, SetSelectionResponse};

use crate::handlers::payload::JsonPayload;
use crate::infra::{app_state::AppState, errors::AppResult};

/// `POST /api/selected`: replace the global selection wholesale.
pub async fn set_selection_handler(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload<SetSelectionRequest>,
) -> AppResult<Json<SetSelectionResponse>> {
    let list = Arc::clone(&state.list);
    let selected_ids = tokio::task::spawn_blocking(move || {
        list.write().set_selection(body.selected_ids).to_vec()
    })
    .await?;

    Ok(Json(SetSelectionResponse {
        success: true,
        selected_ids,
    }))
}
