//! ApiClient adapter that implements ApiService trait
//!
//! Wraps the HTTP [`ApiClient`] to provide the trait-based interface the
//! controller depends on.

use async_trait::async_trait;
use rowkeeper_core::api::routes;
use rowkeeper_model::{
    ItemId, PageRequest, PageResult, SetOrderRequest, SetOrderResponse,
    SetSelectionRequest, SetSelectionResponse,
};
use std::sync::Arc;

use crate::infra::ApiClient;
use crate::infra::services::{ApiResult, ApiService};

#[derive(Debug, Clone)]
pub struct ApiClientAdapter {
    client: Arc<ApiClient>,
}

impl ApiClientAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ApiService for ApiClientAdapter {
    async fn fetch_page(&self, request: &PageRequest) -> ApiResult<PageResult> {
        let query = [
            ("page", request.page.to_string()),
            ("limit", request.limit.to_string()),
            ("search", request.search.clone()),
        ];
        self.client.get_json(routes::ITEMS, &query).await
    }

    async fn save_selection(
        &self,
        ids: &[ItemId],
    ) -> ApiResult<SetSelectionResponse> {
        let body = SetSelectionRequest {
            selected_ids: ids.to_vec(),
        };
        self.client.post_json(routes::SELECTED, &body).await
    }

    async fn save_order(&self, ids: &[ItemId]) -> ApiResult<SetOrderResponse> {
        let body = SetOrderRequest {
            order: ids.to_vec(),
        };
        self.client.post_json(routes::ORDER, &body).await
    }
}
