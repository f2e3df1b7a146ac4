//! Core data model definitions shared across Rowkeeper crates.
#![allow(missing_docs)]

pub mod api;
pub mod error;
pub mod ids;
pub mod item;
pub mod page;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use api::{
    ErrorResponse, SetOrderRequest, SetOrderResponse, SetSelectionRequest,
    SetSelectionResponse,
};
pub use error::{ModelError, Result as ModelResult};
pub use ids::ItemId;
pub use item::{DEFAULT_LABEL_PREFIX, Item};
pub use page::{DEFAULT_PAGE_LIMIT, PageRequest, PageResult, total_pages};
