use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use rowkeeper_core::ListParams;
use rowkeeper_model::PageResult;
use tracing::debug;

use crate::infra::{app_state::AppState, errors::AppResult};

/// `GET /api/items`: one page of the filtered, custom-ordered collection.
///
/// Query parameters never reject a request. Each key falls back to its
/// default on its own, and a repeated key keeps its first value.
pub async fn list_items_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<PageResult>> {
    let params = match query {
        Ok(Query(pairs)) => ListParams::from_pairs(pairs),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "unreadable list query, using defaults");
            ListParams::default()
        }
    };
    let request = params.into_request(state.default_page_limit())?;

    // Filtering and ranking a large collection is CPU bound.
    let list = Arc::clone(&state.list);
    let page =
        tokio::task::spawn_blocking(move || list.read().list(&request)).await?;

    Ok(Json(page))
}
