use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rowkeeper_core::{ListService, Store};
use rowkeeper_model::{
    ItemId, PageRequest, PageResult, SetOrderResponse, SetSelectionResponse,
};

use crate::infra::services::{ApiError, ApiResult, ApiService};

/// [`ApiService`] backed by a real [`ListService`], recording every call.
#[derive(Debug, Clone)]
pub struct TestApiService {
    inner: Arc<Mutex<InnerApiState>>,
}

#[derive(Debug)]
struct InnerApiState {
    service: ListService,
    fetches: Vec<PageRequest>,
    selection_writes: Vec<Vec<ItemId>>,
    order_writes: Vec<Vec<ItemId>>,
    fail_fetches: bool,
    fail_writes: bool,
}

impl Default for TestApiService {
    fn default() -> Self {
        Self::with_items(100)
    }
}

impl TestApiService {
    pub fn new(service: ListService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(InnerApiState {
                service,
                fetches: Vec::new(),
                selection_writes: Vec::new(),
                order_writes: Vec::new(),
                fail_fetches: false,
                fail_writes: false,
            })),
        }
    }

    /// Stub over `size` generated items labelled `Item <id>`.
    pub fn with_items(size: u64) -> Self {
        let store = Store::generate(size, rowkeeper_model::DEFAULT_LABEL_PREFIX)
            .unwrap_or_default();
        Self::new(ListService::new(store))
    }

    pub fn set_fail_fetches(&self, value: bool) {
        self.inner.lock().fail_fetches = value;
    }

    pub fn set_fail_writes(&self, value: bool) {
        self.inner.lock().fail_writes = value;
    }

    /// Seed server-side state as if another client had written it.
    pub fn seed_selection(&self, ids: Vec<ItemId>) {
        self.inner.lock().service.set_selection(ids);
    }

    pub fn seed_order(&self, ids: Vec<ItemId>) {
        self.inner.lock().service.set_order(ids);
    }

    pub fn fetches(&self) -> Vec<PageRequest> {
        self.inner.lock().fetches.clone()
    }

    pub fn selection_writes(&self) -> Vec<Vec<ItemId>> {
        self.inner.lock().selection_writes.clone()
    }

    pub fn order_writes(&self) -> Vec<Vec<ItemId>> {
        self.inner.lock().order_writes.clone()
    }

    pub fn stored_selection(&self) -> Vec<ItemId> {
        self.inner.lock().service.selection().to_vec()
    }

    pub fn stored_order(&self) -> Vec<ItemId> {
        self.inner.lock().service.order().to_vec()
    }
}

#[async_trait]
impl ApiService for TestApiService {
    async fn fetch_page(&self, request: &PageRequest) -> ApiResult<PageResult> {
        let mut guard = self.inner.lock();
        guard.fetches.push(request.clone());
        if guard.fail_fetches {
            return Err(ApiError::Unavailable(
                "TestApiService::fetch_page configured to fail".into(),
            ));
        }
        Ok(guard.service.list(request))
    }

    async fn save_selection(
        &self,
        ids: &[ItemId],
    ) -> ApiResult<SetSelectionResponse> {
        let mut guard = self.inner.lock();
        guard.selection_writes.push(ids.to_vec());
        if guard.fail_writes {
            return Err(ApiError::Unavailable(
                "TestApiService::save_selection configured to fail".into(),
            ));
        }
        let selected_ids = guard.service.set_selection(ids.to_vec()).to_vec();
        Ok(SetSelectionResponse {
            success: true,
            selected_ids,
        })
    }

    async fn save_order(&self, ids: &[ItemId]) -> ApiResult<SetOrderResponse> {
        let mut guard = self.inner.lock();
        guard.order_writes.push(ids.to_vec());
        if guard.fail_writes {
            return Err(ApiError::Unavailable(
                "TestApiService::save_order configured to fail".into(),
            ));
        }
        let order = guard.service.set_order(ids.to_vec()).to_vec();
        Ok(SetOrderResponse {
            success: true,
            order,
        })
    }
}
