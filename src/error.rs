//! Error types for the file registry
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Registry Error Enum ==
/// Unified error type for the file registry server.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Key not found in the registry
    #[error("file not found: {0}")]
    NotFound(String),

    /// Key has expired
    #[error("file expired: {0}")]
    Expired(String),

    /// Malformed upload (bad multipart body, missing file field)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Upload exceeds the configured size cap
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RegistryError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            RegistryError::Expired(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            RegistryError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            RegistryError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            RegistryError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the file registry server.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (
                RegistryError::NotFound("k".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                RegistryError::Expired("k".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                RegistryError::InvalidRequest("bad form".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                RegistryError::PayloadTooLarge("too big".to_string()),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                RegistryError::Internal("stream failure".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
