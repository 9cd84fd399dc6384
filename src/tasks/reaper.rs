//! Expiration Reaper Task
//!
//! Background task that periodically removes expired files from the registry.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::registry::Registry;

/// Spawns a background task that periodically sweeps expired registry entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each sweep briefly takes the write lock, removes every
/// entry whose deadline has passed, and logs the removed keys. The sweep
/// itself cannot fail, so no per-entry condition ever terminates the loop.
///
/// # Arguments
/// * `registry` - Shared reference to the registry
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task; aborting it is the cancellation signal
/// used for graceful shutdown and deterministic tests.
///
/// # Example
/// ```ignore
/// let registry = Arc::new(RwLock::new(Registry::new()));
/// let reaper_handle = spawn_reaper(registry.clone(), 60);
/// // Later, during shutdown:
/// reaper_handle.abort();
/// ```
pub fn spawn_reaper(registry: Arc<RwLock<Registry>>, sweep_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiration reaper with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock only for the sweep itself
            let removed = {
                let mut registry_guard = registry.write().await;
                registry_guard.sweep_now()
            };

            if removed.is_empty() {
                debug!("Reaper sweep: no expired files found");
            } else {
                info!(
                    "Reaper sweep: removed {} expired file(s): {:?}",
                    removed.len(),
                    removed
                );
            }
        }
    })
}
