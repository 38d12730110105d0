//! Handler for requests that match no route.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers unknown paths with a JSON 404.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({"path": uri.path()}))
}
