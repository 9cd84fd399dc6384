//! Stored File Entry Module
//!
//! Defines the structure for individual registry entries with expiration support.

use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;

// == Stored File ==
/// Represents a single uploaded file held in the registry.
///
/// The payload is an immutable, reference-counted byte buffer: cloning an
/// entry bumps a refcount rather than copying the file content, so a download
/// in flight keeps the buffer alive even if the map entry is removed or
/// overwritten underneath it.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Uploader-supplied key (may be empty)
    pub key: String,
    /// The file content
    pub payload: Bytes,
    /// Declared content type, echoed on download
    pub content_type: String,
    /// Original filename, echoed in Content-Disposition on download
    pub filename: String,
    /// Effective expiration duration chosen at upload time, in minutes
    pub ttl_minutes: u64,
    /// Upload timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds); always set
    pub expires_at: u64,
}

impl StoredFile {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_minutes` from now.
    ///
    /// # Arguments
    /// * `key` - The registry key the entry is stored under
    /// * `payload` - The file content
    /// * `content_type` - Declared content type from the upload
    /// * `filename` - Original filename from the upload
    /// * `ttl_minutes` - Already-validated, non-negative expiration in minutes
    pub fn new(
        key: String,
        payload: Bytes,
        content_type: String,
        filename: String,
        ttl_minutes: u64,
    ) -> Self {
        let now = current_timestamp_ms();

        // Saturate so an absurdly large ttl pins the deadline at the far
        // future instead of wrapping into the past
        let expires_at = now.saturating_add(ttl_minutes.saturating_mul(60_000));

        Self {
            key,
            payload,
            content_type,
            filename,
            ttl_minutes,
            created_at: now,
            expires_at,
        }
    }

    // == Is Expired At ==
    /// Checks whether the entry has expired as of `now_ms`.
    ///
    /// Boundary condition: an entry is expired when `now_ms` is greater than
    /// or equal to `expires_at`, so a ttl of zero minutes expires immediately.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of the current wall clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Returns the payload length in bytes.
    pub fn size(&self) -> usize {
        self.payload.len()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry(ttl_minutes: u64) -> StoredFile {
        StoredFile::new(
            "report".to_string(),
            Bytes::from_static(b"file content"),
            "text/plain".to_string(),
            "report.txt".to_string(),
            ttl_minutes,
        )
    }

    #[test]
    fn test_entry_creation() {
        let entry = sample_entry(10);

        assert_eq!(entry.key, "report");
        assert_eq!(entry.payload.as_ref(), b"file content");
        assert_eq!(entry.content_type, "text/plain");
        assert_eq!(entry.filename, "report.txt");
        assert_eq!(entry.size(), 12);
        assert_eq!(entry.expires_at, entry.created_at + 10 * 60_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_zero_ttl_expires_immediately() {
        let entry = sample_entry(0);

        assert_eq!(entry.expires_at, entry.created_at);
        assert!(entry.is_expired());
    }

    #[test]
    fn test_huge_ttl_saturates_instead_of_wrapping() {
        let entry = sample_entry(u64::MAX);

        // The deadline saturates at the far future; a wraparound would land
        // in the past and expire the entry on arrival
        assert_eq!(entry.expires_at, u64::MAX);
        assert!(entry.expires_at > entry.created_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = sample_entry(5);

        // Not yet expired one millisecond before the deadline
        assert!(!entry.is_expired_at(entry.expires_at - 1));
        // Expired exactly at the deadline and after it
        assert!(entry.is_expired_at(entry.expires_at));
        assert!(entry.is_expired_at(entry.expires_at + 1));
    }

    #[test]
    fn test_clone_shares_payload_storage() {
        let entry = sample_entry(10);
        let handle = entry.clone();

        // Bytes clones point at the same backing storage
        assert_eq!(
            entry.payload.as_ptr(),
            handle.payload.as_ptr(),
            "clone should share the payload buffer, not copy it"
        );
        drop(entry);
        assert_eq!(handle.payload.as_ref(), b"file content");
    }
}
