//! Response DTOs for the file registry API
//!
//! Defines the structure of outgoing HTTP response bodies. The download
//! endpoint responds with raw payload bytes rather than JSON, so it has no
//! DTO here.

use serde::Serialize;

use crate::registry::StoredFile;

/// Response body for the upload operation (POST /upload)
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    /// Success message
    pub message: String,
    /// The key the file was stored under
    pub key: String,
    /// Original filename
    pub filename: String,
    /// Payload size in bytes
    pub size: usize,
    /// Absolute expiration time, RFC 3339
    pub expires_at: String,
}

impl UploadResponse {
    /// Creates a new UploadResponse from a freshly stored entry
    pub fn new(entry: &StoredFile) -> Self {
        let expires_at = chrono::DateTime::from_timestamp_millis(entry.expires_at as i64)
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        Self {
            message: format!("File stored under key '{}'", entry.key),
            key: entry.key.clone(),
            filename: entry.filename.clone(),
            size: entry.size(),
            expires_at,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
