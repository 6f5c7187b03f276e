use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::error;

/// Client-facing wrapper around `pack_core::Error`.
///
/// Pack decode internals never reach the client; they go to the log
/// and the response carries a generic message.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl From<pack_core::Error> for ApiError {
    fn from(err: pack_core::Error) -> Self {
        match err {
            pack_core::Error::NotFound(name) => ApiError::NotFound(name),
            pack_core::Error::Io(err) => {
                error!("pack store IO failure: {err}");
                ApiError::Internal("internal error".to_string())
            }
            other => {
                error!("pack decode failure: {other}");
                ApiError::Internal("Malformed pack document".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(name) => {
                (StatusCode::NOT_FOUND, format!("Pack '{name}' not found."))
            }
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
