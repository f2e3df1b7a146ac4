//! In-memory doubles for exercising the client without a server.

pub mod stubs;

pub use stubs::TestApiService;
