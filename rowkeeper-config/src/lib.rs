//! Shared configuration library for Rowkeeper.
//!
//! This crate centralizes config defaults, `.env` handling, TOML file
//! loading, environment overrides and guard-rail validation so the server
//! binary and its tests share a single source of truth.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    Config, ConfigMetadata, CorsConfig, DatasetConfig, PagingConfig,
    ServerConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
