use axum::extract::FromRequest;

use crate::infra::errors::AppError;

/// `Json` extractor whose rejections render as the API's
/// `{ success: false, message }` body instead of axum's plain text.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonPayload<T>(pub T);
