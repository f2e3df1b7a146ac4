use std::sync::Arc;

use axum::{Json, extract::State};
use rowkeeper_model::{SetOrderRequest, SetOrderResponse};

use crate::handlers::payload::JsonPayload;
use crate::infra::{app_state::AppState, errors::AppResult};

/// `POST /api/order`: replace the custom order wholesale. Ids are stored
/// as sent, duplicates and unknown ids included.
pub async fn set_order_handler(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload<SetOrderRequest>,
) -> AppResult<Json<SetOrderResponse>> {
    // The write lock waits out any list computation still holding a read.
    let list = Arc::clone(&state.list);
    let order = tokio::task::spawn_blocking(move || {
        list.write().set_order(body.order).to_vec()
    })
    .await?;

    Ok(Json(SetOrderResponse {
        success: true,
        order,
    }))
}
