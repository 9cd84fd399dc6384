//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiration Reaper: Removes expired registry entries at configured intervals

mod reaper;

pub use reaper::spawn_reaper;
