//! Rowkeeper client library.
//!
//! - [`view`]: the list view state machine (infinite scroll, local sort,
//!   drag reordering, selection) as a pure reducer.
//! - [`controller`]: runs the reducer's effects against an
//!   [`infra::services::ApiService`].
//! - [`infra`]: the HTTP client and its `ApiService` adapter.

pub mod controller;
pub mod infra;
pub mod view;

pub use controller::ListController;
pub use infra::adapters::ApiClientAdapter;
pub use infra::api_client::{ApiClient, DEFAULT_SERVER_URL};
pub use infra::services::{ApiError, ApiResult, ApiService};
