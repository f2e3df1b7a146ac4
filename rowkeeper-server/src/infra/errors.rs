use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rowkeeper_core::CoreError;
use rowkeeper_model::ErrorResponse;
use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

/// Message returned for any write body that does not match its schema.
pub const INVALID_DATA_FORMAT: &str = "Invalid data format";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn invalid_data_format() -> Self {
        Self::bad_request(INVALID_DATA_FORMAT)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(
            status = %rejection.status(),
            reason = %rejection.body_text(),
            "rejected malformed write payload"
        );
        Self::invalid_data_format()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidRequest(_) => Self::bad_request(err.to_string()),
            CoreError::DatasetTooLarge { .. } => Self::internal(err.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!(error = %err, "list computation task failed");
        Self::internal("List computation failed")
    }
}
