use axum::{http::StatusCode, response::Response};

use crate::response::error_response;

/// Fallback handler for routes that do not exist.
pub async fn get_404_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "no route matches the requested path")
}
