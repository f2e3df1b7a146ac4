use axum::http::{HeaderValue, Method, header::HeaderName};
use thiserror::Error;

use super::models::{Config, CorsConfig};

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("DEFAULT_PAGE_LIMIT must be greater than zero")]
    ZeroPageLimit,
    #[error("DATASET_LABEL_PREFIX must not be empty")]
    EmptyLabelPrefix,
    #[error("invalid CORS configuration: {reason}")]
    InvalidCorsConfig { reason: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.paging.default_limit == 0 {
        return Err(ConfigGuardRailError::ZeroPageLimit);
    }

    if config.dataset.label_prefix.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyLabelPrefix);
    }

    validate_cors(&config.cors)?;

    if config.dataset.size == 0 {
        warnings.push_with_hint(
            "DATASET_SIZE is 0; every list request will return an empty page",
            "Unset DATASET_SIZE to generate the default one million items",
        );
    }

    if config.cors.is_wildcard_included() {
        warnings.push_with_hint(
            "CORS allows any origin",
            "Set CORS_ALLOWED_ORIGINS to the client's origin outside local development",
        );
    }

    Ok(warnings)
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigGuardRailError> {
    if cors.allowed_methods.is_empty() {
        return Err(ConfigGuardRailError::InvalidCorsConfig {
            reason:
                "CORS_ALLOWED_METHODS must include at least one HTTP method"
                    .into(),
        });
    }

    for method in &cors.allowed_methods {
        Method::from_bytes(method.as_bytes()).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid HTTP method `{}` in CORS_ALLOWED_METHODS",
                    method
                ),
            }
        })?;
    }

    for header in &cors.allowed_headers {
        HeaderName::from_bytes(header.as_bytes()).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid header name `{}` in CORS_ALLOWED_HEADERS",
                    header
                ),
            }
        })?;
    }

    for origin in &cors.allowed_origins {
        if origin.trim() == "*" {
            continue;
        }
        HeaderValue::from_str(origin).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid origin `{}` in CORS_ALLOWED_ORIGINS",
                    origin
                ),
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_with_wildcard_warning() {
        let warnings = apply_guard_rails(&Config::default()).unwrap();
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].message.contains("any origin"));
    }

    #[test]
    fn zero_limit_is_fatal() {
        let mut config = Config::default();
        config.paging.default_limit = 0;
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::ZeroPageLimit)
        ));
    }

    #[test]
    fn bad_cors_method_is_fatal() {
        let mut config = Config::default();
        config.cors.allowed_methods = vec!["GE T".into()];
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::InvalidCorsConfig { .. })
        ));
    }

    #[test]
    fn empty_dataset_warns() {
        let mut config = Config::default();
        config.dataset.size = 0;
        config.cors.allowed_origins = vec!["http://localhost:3000".into()];
        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].message.contains("DATASET_SIZE"));
    }
}
