//! List service: the read and write operations exposed over HTTP.

use rowkeeper_model::{ItemId, PageRequest, PageResult, total_pages};
use tracing::{debug, info};

use crate::query::{filtering::filter_items, paging::paginate, ranking::OrderRank};
use crate::store::Store;

/// Owns the [`Store`] and answers list, selection and order requests.
///
/// Writes are last-write-wins replacements; nothing is merged or validated
/// against the item collection.
#[derive(Debug, Clone, Default)]
pub struct ListService {
    store: Store,
}

impl ListService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Filter by search term, rank by the custom order, then slice the page.
    ///
    /// `total_items` counts the filtered set before paging, and
    /// `selected_ids` is always the full global selection.
    pub fn list(&self, request: &PageRequest) -> PageResult {
        let mut matched = filter_items(self.store.items(), &request.search);
        OrderRank::new(self.store.order()).apply(&mut matched);

        let total_items = matched.len() as u64;
        let items = paginate(&matched, request)
            .iter()
            .map(|item| (*item).clone())
            .collect::<Vec<_>>();

        debug!(
            page = request.page,
            limit = request.limit,
            search = %request.search,
            total_items,
            returned = items.len(),
            "list request served"
        );

        PageResult {
            items,
            total_items,
            total_pages: total_pages(total_items, request.limit),
            current_page: request.page,
            selected_ids: self.store.selection().to_vec(),
        }
    }

    pub fn selection(&self) -> &[ItemId] {
        self.store.selection()
    }

    pub fn order(&self) -> &[ItemId] {
        self.store.order()
    }

    /// Replace the global selection and return what is now stored.
    pub fn set_selection(&mut self, ids: Vec<ItemId>) -> &[ItemId] {
        info!(count = ids.len(), "selection replaced");
        self.store.replace_selection(ids)
    }

    /// Replace the custom order and return what is now stored.
    pub fn set_order(&mut self, ids: Vec<ItemId>) -> &[ItemId] {
        info!(count = ids.len(), "custom order replaced");
        self.store.replace_order(ids)
    }
}
