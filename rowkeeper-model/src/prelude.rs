//! Client/UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in rowkeeper-client or other presentation layers.

pub use super::api::{SetOrderRequest, SetSelectionRequest};
pub use super::ids::ItemId;
pub use super::item::Item;
pub use super::page::{DEFAULT_PAGE_LIMIT, PageRequest, PageResult};
