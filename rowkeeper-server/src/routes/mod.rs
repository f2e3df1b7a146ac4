use axum::{
    Router,
    routing::{get, post},
};
use rowkeeper_core::api::routes;

use crate::AppState;
use crate::handlers::{
    list_items_handler, set_order_handler, set_selection_handler,
};

/// Create the list API router.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(routes::ITEMS, get(list_items_handler))
        .route(routes::SELECTED, post(set_selection_handler))
        .route(routes::ORDER, post(set_order_handler))
}
