//! Temp File Registry - a temporary in-memory file registry
//!
//! Clients upload a file bound to a key with an optional expiration in
//! minutes; other clients download it by key before it expires. A background
//! reaper evicts expired files.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_reaper;
