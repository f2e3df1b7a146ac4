//! Compose a [`Config`] from defaults, an optional TOML file and the
//! environment, then run the guard rails over the result.

pub mod error;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{Config, ConfigMetadata};
use crate::validation::{ConfigWarnings, apply_guard_rails};
use error::ConfigLoadError;

/// A loaded configuration together with the non-fatal findings produced
/// while validating it.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    load_env_file: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            load_env_file: true,
        }
    }

    /// Use an explicit TOML file instead of `ROWKEEPER_CONFIG`.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Skip reading `.env` from the working directory.
    pub fn without_env_file(mut self) -> Self {
        self.load_env_file = false;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = if self.load_env_file {
            load_env_file()?
        } else {
            false
        };

        let mut load = self.load_from_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose against an already gathered environment.
    pub fn load_from_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let config_path = self.config_path.clone().or(env.config_path.clone());
        let file = match config_path.as_deref() {
            Some(path) => read_config_file(path)?,
            None => FileConfig::default(),
        };

        let config = compose(file, env, config_path);
        let warnings = apply_guard_rails(&config)?;
        Ok(ConfigLoad { config, warnings })
    }
}

fn load_env_file() -> Result<bool, ConfigLoadError> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded .env file");
            Ok(true)
        }
        Err(err) if err.not_found() => Ok(false),
        Err(err) => Err(err.into()),
    }
}

fn read_config_file(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::ConfigFileIo {
            path: path.to_path_buf(),
            source,
        }
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

fn compose(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Config {
    let mut config = Config::default();

    if let Some(host) = env.server_host.or(file.server.host) {
        config.server.host = host;
    }
    if let Some(port) = env.server_port.or(file.server.port) {
        config.server.port = port;
    }
    if let Some(size) = env.dataset_size.or(file.dataset.size) {
        config.dataset.size = size;
    }
    if let Some(prefix) = env.dataset_label_prefix.or(file.dataset.label_prefix)
    {
        config.dataset.label_prefix = prefix;
    }
    if let Some(limit) = env.default_page_limit.or(file.paging.default_limit) {
        config.paging.default_limit = limit;
    }
    if let Some(origins) =
        env.cors_allowed_origins.or(file.cors.allowed_origins)
    {
        config.cors.allowed_origins = origins;
    }
    if let Some(methods) =
        env.cors_allowed_methods.or(file.cors.allowed_methods)
    {
        config.cors.allowed_methods = methods;
    }
    if let Some(headers) =
        env.cors_allowed_headers.or(file.cors.allowed_headers)
    {
        config.cors.allowed_headers = headers;
    }

    config.metadata = ConfigMetadata {
        config_path,
        env_file_loaded: false,
    };
    config
}
