pub mod api;

pub use api::TestApiService;
