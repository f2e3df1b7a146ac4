//! List view state

use std::borrow::Cow;

use rowkeeper_model::{Item, ItemId, PageRequest};

use super::drag::DragState;
use super::sort::SortState;

/// Rows requested per page.
pub const PAGE_LIMIT: u64 = 20;

/// Coarse lifecycle of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Not mounted yet
    Idle,
    /// A page request is outstanding
    Loading { page: u64 },
    /// Last request settled
    Loaded,
}

/// Main list view state
#[derive(Debug, Clone)]
pub struct ListView {
    /// Buffered rows in server order, as rearranged by drags
    pub(crate) items: Vec<Item>,
    /// Locally selected ids, in toggle order
    pub(crate) selected: Vec<ItemId>,
    pub(crate) search: String,
    /// Highest page requested so far
    pub(crate) page: u64,
    pub(crate) total_items: u64,
    pub(crate) total_pages: u64,
    pub(crate) mounted: bool,
    pub(crate) loading: bool,
    pub(crate) loading_more: bool,
    pub(crate) drag: Option<DragState>,
    pub(crate) sort: Option<SortState>,
    /// A first-page fetch was requested during a drag
    pub(crate) deferred_fetch: bool,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: Vec::new(),
            search: String::new(),
            page: 1,
            total_items: 0,
            total_pages: 0,
            mounted: false,
            loading: false,
            loading_more: false,
            drag: None,
            sort: None,
            deferred_fetch: false,
        }
    }

    /// Unmounted view that will search for `search` once mounted.
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::new()
        }
    }

    /// Buffered rows in server order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Rows as displayed: the buffer, or a sorted copy while a column sort
    /// is active.
    pub fn rows(&self) -> Cow<'_, [Item]> {
        match &self.sort {
            Some(sort) => Cow::Owned(sort.sorted(&self.items)),
            None => Cow::Borrowed(&self.items),
        }
    }

    pub fn selected(&self) -> &[ItemId] {
        &self.selected
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Vertical scrolling is disabled for the duration of a drag.
    pub fn scroll_locked(&self) -> bool {
        self.is_dragging()
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn phase(&self) -> ViewPhase {
        if !self.mounted {
            ViewPhase::Idle
        } else if self.loading {
            ViewPhase::Loading { page: self.page }
        } else {
            ViewPhase::Loaded
        }
    }

    /// Nothing buffered and nothing in flight: render the "loading data"
    /// placeholder instead of the table.
    pub fn shows_placeholder(&self) -> bool {
        self.items.is_empty() && !self.loading
    }

    /// Every buffered row has been fetched.
    pub fn is_exhausted(&self) -> bool {
        self.page >= self.total_pages || self.items.len() as u64 >= self.total_items
    }

    pub(crate) fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            limit: PAGE_LIMIT,
            search: self.search.clone(),
        }
    }

    pub(crate) fn buffered_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }
}
