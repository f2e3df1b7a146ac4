//! Built-in defaults applied when neither the config file nor the
//! environment provides a value.

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATASET_SIZE: u64 = 1_000_000;
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["*"];
pub const DEFAULT_CORS_METHODS: &[&str] = &["GET", "POST", "OPTIONS"];
pub const DEFAULT_CORS_HEADERS: &[&str] = &["content-type"];

/// Environment variable naming the optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "ROWKEEPER_CONFIG";
