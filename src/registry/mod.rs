//! Registry Module
//!
//! Provides the in-memory file registry with per-entry expiration.

mod entry;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, StoredFile};
pub use store::Registry;

// == Public Constants ==
/// One megabyte, the unit for the upload size cap
pub const MB: usize = 1 << 20;
