use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::CONFIG_PATH_VAR;
use crate::util::{non_blank, parse_csv};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub dataset: FileDatasetConfig,
    #[serde(default)]
    pub paging: FilePagingConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileDatasetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_prefix: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FilePagingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub dataset_size: Option<u64>,
    pub dataset_label_prefix: Option<String>,
    pub default_page_limit: Option<u64>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub cors_allowed_methods: Option<Vec<String>>,
    pub cors_allowed_headers: Option<Vec<String>>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. `SERVER_PORT` wins over the
    /// conventional `PORT`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).and_then(non_blank);
        let parsed = |name: &str| var(name).and_then(|raw| raw.trim().parse().ok());

        Self {
            config_path: var(CONFIG_PATH_VAR).map(PathBuf::from),
            server_host: var("SERVER_HOST"),
            server_port: parsed("SERVER_PORT").or_else(|| parsed("PORT")),
            dataset_size: var("DATASET_SIZE")
                .and_then(|raw| raw.trim().replace('_', "").parse().ok()),
            dataset_label_prefix: var("DATASET_LABEL_PREFIX"),
            default_page_limit: var("DEFAULT_PAGE_LIMIT")
                .and_then(|raw| raw.trim().parse().ok()),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_csv(&raw)),
            cors_allowed_methods: var("CORS_ALLOWED_METHODS")
                .map(|raw| parse_csv(&raw)),
            cors_allowed_headers: var("CORS_ALLOWED_HEADERS")
                .map(|raw| parse_csv(&raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> EnvConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn server_port_takes_precedence_over_port() {
        assert_eq!(env(&[("PORT", "8080")]).server_port, Some(8080));
        assert_eq!(
            env(&[("PORT", "8080"), ("SERVER_PORT", "9090")]).server_port,
            Some(9090)
        );
    }

    #[test]
    fn blank_and_invalid_values_are_unset() {
        let env = env(&[
            ("SERVER_HOST", "  "),
            ("SERVER_PORT", "not-a-port"),
            ("DEFAULT_PAGE_LIMIT", "-4"),
        ]);
        assert!(env.server_host.is_none());
        assert!(env.server_port.is_none());
        assert!(env.default_page_limit.is_none());
    }

    #[test]
    fn dataset_size_accepts_underscores() {
        assert_eq!(env(&[("DATASET_SIZE", "1_000")]).dataset_size, Some(1000));
    }

    #[test]
    fn cors_lists_split_on_commas() {
        let env = env(&[("CORS_ALLOWED_METHODS", "GET, POST")]);
        assert_eq!(
            env.cors_allowed_methods,
            Some(vec!["GET".to_string(), "POST".to_string()])
        );
    }
}
