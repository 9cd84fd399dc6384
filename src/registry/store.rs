//! Registry Store Module
//!
//! Main registry engine: a HashMap of stored files with per-entry expiration.

use std::collections::HashMap;

use bytes::Bytes;

use crate::error::{RegistryError, Result};
use crate::registry::{current_timestamp_ms, StoredFile};

// == Registry ==
/// In-memory mapping from key to stored file.
///
/// The struct itself is not synchronized; callers wrap it in
/// `Arc<RwLock<Registry>>` (see `AppState`) so that put/get/delete/sweep are
/// linearized by a single lock and no operation is observed partially applied.
/// Entries are metadata plus a refcounted payload handle, so nothing expensive
/// ever happens under the lock.
#[derive(Debug, Default)]
pub struct Registry {
    /// Key to stored-file mapping
    entries: HashMap<String, StoredFile>,
}

impl Registry {
    // == Constructor ==
    /// Creates a new empty Registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Put ==
    /// Stores a file under `key`, overwriting any existing entry.
    ///
    /// Last writer wins; the replaced entry's payload buffer is freed once no
    /// in-flight download still holds a handle to it. The key may be empty —
    /// it is a valid, if unusual, map key. `ttl_minutes` must already be
    /// validated by the caller (the boundary layer substitutes the configured
    /// default for anything that does not parse as a non-negative integer).
    ///
    /// # Arguments
    /// * `key` - The key to store the file under
    /// * `payload` - The file content
    /// * `content_type` - Declared content type from the upload
    /// * `filename` - Original filename from the upload
    /// * `ttl_minutes` - Expiration in minutes from now
    pub fn put(
        &mut self,
        key: String,
        payload: Bytes,
        content_type: String,
        filename: String,
        ttl_minutes: u64,
    ) -> StoredFile {
        let entry = StoredFile::new(key.clone(), payload, content_type, filename, ttl_minutes);
        self.entries.insert(key, entry.clone());
        entry
    }

    // == Get ==
    /// Retrieves the file stored under `key`.
    ///
    /// Returns a clone of the entry; the payload clone is a refcount bump, so
    /// the caller can stream it after releasing the registry lock, unaffected
    /// by a concurrent delete or overwrite.
    ///
    /// An entry whose deadline has passed but that the reaper has not swept
    /// yet is treated as absent: it is removed here and reported as expired.
    /// Both absent and expired map to a not-found response at the boundary.
    pub fn get(&mut self, key: &str) -> Result<StoredFile> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                Err(RegistryError::Expired(key.to_string()))
            }
            Some(entry) => Ok(entry.clone()),
            None => Err(RegistryError::NotFound(key.to_string())),
        }
    }

    // == Delete ==
    /// Removes the entry under `key`, if any.
    ///
    /// Idempotent: deleting an absent key is a no-op. Returns whether an
    /// entry was actually removed, for logging only.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Sweep Expired ==
    /// Removes every entry whose deadline is at or before `now_ms`.
    ///
    /// Returns the removed keys so the reaper can log them.
    pub fn sweep_expired(&mut self, now_ms: u64) -> Vec<String> {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now_ms))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
        }

        expired_keys
    }

    /// Sweeps using the current wall clock.
    pub fn sweep_now(&mut self) -> Vec<String> {
        self.sweep_expired(current_timestamp_ms())
    }

    // == Length ==
    /// Returns the current number of entries in the registry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
