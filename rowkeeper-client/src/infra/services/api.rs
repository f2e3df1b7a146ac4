//! API service trait
//!
//! The list view only talks to the server through this seam, so the
//! controller can run against the HTTP adapter or an in-memory stub.

use async_trait::async_trait;
use rowkeeper_model::{
    ItemId, PageRequest, PageResult, SetOrderResponse, SetSelectionResponse,
};
use std::fmt::Debug;

use super::error::ApiResult;

#[async_trait]
pub trait ApiService: Send + Sync + Debug {
    /// Fetch one page of the filtered, custom-ordered list.
    async fn fetch_page(&self, request: &PageRequest) -> ApiResult<PageResult>;

    /// Replace the server-side selection.
    async fn save_selection(
        &self,
        ids: &[ItemId],
    ) -> ApiResult<SetSelectionResponse>;

    /// Replace the server-side custom order.
    async fn save_order(&self, ids: &[ItemId]) -> ApiResult<SetOrderResponse>;
}
