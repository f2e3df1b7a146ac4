use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
