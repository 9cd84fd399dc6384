//! API Handlers
//!
//! HTTP request handlers for each file registry endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Multipart, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::{debug, error};

use crate::error::{RegistryError, Result};
use crate::models::{DownloadQuery, HealthResponse, UploadResponse};
use crate::registry::{Registry, MB};

/// Application state shared across all handlers.
///
/// Contains the registry wrapped in Arc<RwLock<>> for thread-safe access,
/// plus the immutable upload policy derived from configuration.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe file registry
    pub registry: Arc<RwLock<Registry>>,
    /// Expiration applied when the uploader supplies no valid value, minutes
    pub default_expiry_minutes: u64,
    /// Upload size cap in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Creates a new AppState with the given registry and upload policy.
    pub fn new(registry: Registry, default_expiry_minutes: u64, max_upload_bytes: usize) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            default_expiry_minutes,
            max_upload_bytes,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            Registry::new(),
            config.default_expiry_minutes,
            config.max_file_size_mb * MB,
        )
    }
}

/// Maps a multipart read failure to the matching registry error.
///
/// A body that trips the transport-level size limit surfaces here as a
/// length-limit read error; it gets the same 413 as the handler's explicit
/// payload check so both rejection layers agree. Genuinely unexpected stream
/// failures are logged and surfaced as internal errors rather than blamed on
/// the client.
fn multipart_error(err: axum::extract::multipart::MultipartError) -> RegistryError {
    match err.status() {
        StatusCode::PAYLOAD_TOO_LARGE => RegistryError::PayloadTooLarge(err.body_text()),
        StatusCode::INTERNAL_SERVER_ERROR => {
            error!("multipart read failed: {err}");
            RegistryError::Internal(err.body_text())
        }
        _ => RegistryError::InvalidRequest(err.body_text()),
    }
}

/// Handler for POST /upload
///
/// Accepts a multipart form with fields `key` (text, absent means the empty
/// key), `expiryTimeMinutes` (optional text; anything that does not parse as
/// a non-negative integer falls back to the configured default), and `file`
/// (the payload with its declared content type and filename). The registry
/// only ever receives the already-validated integer ttl.
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut key = String::new();
    let mut expiry_minutes: Option<u64> = None;
    let mut file: Option<(Bytes, String, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "key" => {
                key = field.text().await.map_err(multipart_error)?;
            }
            "expiryTimeMinutes" => {
                let raw = field.text().await.map_err(multipart_error)?;
                expiry_minutes = raw.trim().parse::<u64>().ok();
            }
            "file" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let filename = field.file_name().unwrap_or_default().to_string();
                let payload = field.bytes().await.map_err(multipart_error)?;
                file = Some((payload, content_type, filename));
            }
            _ => {}
        }
    }

    let (payload, content_type, filename) = file.ok_or_else(|| {
        RegistryError::InvalidRequest("multipart form is missing the 'file' field".to_string())
    })?;

    // Reject oversized uploads before touching the registry
    if payload.len() > state.max_upload_bytes {
        return Err(RegistryError::PayloadTooLarge(format!(
            "upload of {} bytes exceeds the configured cap of {} bytes",
            payload.len(),
            state.max_upload_bytes
        )));
    }

    let ttl_minutes = expiry_minutes.unwrap_or(state.default_expiry_minutes);

    // The payload is fully materialized; the lock is held only for the insert
    let entry = {
        let mut registry = state.registry.write().await;
        registry.put(key, payload, content_type, filename, ttl_minutes)
    };

    debug!(
        key = %entry.key,
        filename = %entry.filename,
        size = entry.size(),
        ttl_minutes = entry.ttl_minutes,
        "file stored"
    );

    Ok(Json(UploadResponse::new(&entry)))
}

/// Handler for GET /download
///
/// Looks up the key, optionally removing the entry afterwards when
/// `delete=true` (delete-on-read). The entry is cloned out under the lock and
/// the response body is built afterwards, so a slow client never serializes
/// registry access and a concurrent delete cannot invalidate the payload
/// being streamed.
pub async fn download_handler(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response> {
    let entry = {
        let mut registry = state.registry.write().await;
        let entry = registry.get(&query.key)?;
        if query.delete_requested() {
            registry.delete(&query.key);
        }
        entry
    };

    debug!(
        key = %entry.key,
        filename = %entry.filename,
        size = entry.size(),
        delete_on_read = query.delete_requested(),
        "file served"
    );

    let headers = [
        (header::CONTENT_TYPE, entry.content_type.clone()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", entry.filename),
        ),
    ];

    Ok((headers, entry.payload).into_response())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
