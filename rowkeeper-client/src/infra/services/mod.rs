pub mod api;
pub mod error;

pub use api::ApiService;
pub use error::{ApiError, ApiResult};
