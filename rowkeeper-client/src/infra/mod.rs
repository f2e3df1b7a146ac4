pub mod adapters;
pub mod api_client;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api_client::ApiClient;
