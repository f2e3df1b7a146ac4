//! # Rowkeeper Core
//!
//! Core library for the Rowkeeper list service: the in-memory item store and
//! the list service that answers paged, searched and custom-ordered reads and
//! applies selection and order writes.
//!
//! ## Overview
//!
//! - **Store**: the generated item collection plus the global selection and
//!   custom order, owned by a single [`ListService`].
//! - **Query pipeline**: [`query::filtering`] narrows by search term,
//!   [`query::ranking`] applies the custom order as a stable sort key and
//!   [`query::paging`] slices the requested page.
//! - **Routes**: [`api::routes`] holds the HTTP paths shared by the server
//!   and the client.
//!
//! ## Examples
//!
//! ```
//! use rowkeeper_core::{ListService, Store};
//! use rowkeeper_model::{ItemId, PageRequest};
//!
//! let mut service = ListService::new(Store::generate(50, "Item").unwrap());
//! service.set_order(vec![ItemId(5), ItemId(3), ItemId(1)]);
//!
//! let page = service.list(&PageRequest::new(1, 4, "").unwrap());
//! let ids: Vec<i64> = page.items.iter().map(|item| item.id.get()).collect();
//! assert_eq!(ids, vec![5, 3, 1, 2]);
//! ```

pub mod api;
pub mod error;
pub mod query;
pub mod service;
pub mod store;

pub use error::{CoreError, Result};
pub use query::params::ListParams;
pub use service::ListService;
pub use store::{MAX_DATASET_SIZE, Store};

pub use rowkeeper_model as model;
