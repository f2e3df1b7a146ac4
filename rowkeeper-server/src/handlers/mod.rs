//! HTTP request handlers organized by functionality

pub mod items;
pub mod order;
pub mod payload;
pub mod selection;

// Re-export commonly used handlers
pub use items::list_items_handler;
pub use order::set_order_handler;
pub use payload::JsonPayload;
pub use selection::set_selection_handler;
