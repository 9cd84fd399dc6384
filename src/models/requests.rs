//! Request DTOs for the file registry API
//!
//! Defines the structure of incoming HTTP request parameters.

use serde::Deserialize;

/// Query parameters for the download operation (GET /download)
///
/// # Fields
/// - `key`: The registry key to download
/// - `delete`: Optional delete-on-read flag; only the exact string "true"
///   triggers removal after the response, any other value retains the file
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadQuery {
    /// The registry key
    pub key: String,
    /// Optional delete-on-read flag
    #[serde(default)]
    pub delete: Option<String>,
}

impl DownloadQuery {
    /// Returns true when the caller asked for delete-on-read.
    pub fn delete_requested(&self) -> bool {
        self.delete.as_deref() == Some("true")
    }
}
