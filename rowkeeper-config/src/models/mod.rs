pub mod sources;

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CORS_HEADERS, DEFAULT_CORS_METHODS, DEFAULT_CORS_ORIGINS,
    DEFAULT_DATASET_SIZE, DEFAULT_HOST, DEFAULT_PORT,
};
use rowkeeper_model::{DEFAULT_LABEL_PREFIX, DEFAULT_PAGE_LIMIT};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub paging: PagingConfig,
    pub cors: CorsConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Shape of the collection generated at startup.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub size: u64,
    pub label_prefix: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_DATASET_SIZE,
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PagingConfig {
    /// Page size used when a list request has no usable `limit`.
    pub default_limit: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|value| value.to_string()).collect()
        }

        Self {
            allowed_origins: owned(DEFAULT_CORS_ORIGINS),
            allowed_methods: owned(DEFAULT_CORS_METHODS),
            allowed_headers: owned(DEFAULT_CORS_HEADERS),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
