use crate::error::{ModelError, Result};
use crate::ids::ItemId;
use crate::item::Item;

/// Page size used by the client view and by the server when a request
/// carries no usable `limit`.
pub const DEFAULT_PAGE_LIMIT: u64 = 20;

/// One page fetch: 1-based page number, page size and free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub search: String,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64, search: impl Into<String>) -> Result<Self> {
        if page == 0 {
            return Err(ModelError::InvalidPage(page));
        }
        if limit == 0 {
            return Err(ModelError::InvalidLimit(limit));
        }
        Ok(Self {
            page,
            limit,
            search: search.into(),
        })
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// `ceil(total_items / limit)`; zero matching items means zero pages.
pub fn total_pages(total_items: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_items.div_ceil(limit)
}

/// Response body of `GET /api/items`.
///
/// `selected_ids` is the global selection, independent of the search and
/// page that produced `items`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageResult {
    pub items: Vec<Item>,
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub selected_ids: Vec<ItemId>,
}
