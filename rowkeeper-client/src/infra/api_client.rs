use log::{info, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use rowkeeper_model::ErrorResponse;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::infra::services::{ApiError, ApiResult};

/// Default server address used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Thin JSON-over-HTTP client for the list server.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url.into());
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| ApiError::Client(err.to_string()))?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self { client, base_url })
    }

    /// Build an absolute URL for a route path such as `/api/items`.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.build_url(path)).query(query);
        self.execute_request(request).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.post(self.build_url(path)).json(body);
        self.execute_request(request).await
    }

    /// Execute a request and map non-success statuses to [`ApiError`].
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::BAD_REQUEST => {
                let message = match response.json::<ErrorResponse>().await {
                    Ok(body) => body.message,
                    Err(_) => "Bad request".to_string(),
                };
                Err(ApiError::Rejected {
                    status: StatusCode::BAD_REQUEST.as_u16(),
                    message,
                })
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(ApiError::Rejected {
                    status: status.as_u16(),
                    message: error_text,
                })
            }
        }
    }
}

/// Accept `localhost:5000` style input: add a scheme when missing and drop
/// trailing slashes so route paths join cleanly.
pub fn normalize_base_url(raw: String) -> String {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed
        } else {
            format!("http://{}", trimmed)
        };
    if with_scheme != raw {
        warn!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    with_scheme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_scheme_and_loses_trailing_slash() {
        assert_eq!(
            normalize_base_url("localhost:5000/".into()),
            "http://localhost:5000"
        );
        assert_eq!(
            normalize_base_url(" https://lists.example.com ".into()),
            "https://lists.example.com"
        );
    }

    #[test]
    fn route_paths_join_onto_base() {
        let client = ApiClient::new("localhost:5000").unwrap();
        assert_eq!(
            client.build_url("/api/items"),
            "http://localhost:5000/api/items"
        );
        assert_eq!(
            client.build_url("http://other:1/api/order"),
            "http://other:1/api/order"
        );
    }
}
