//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults; they are read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Default file expiration in minutes, used when the uploader supplies
    /// no valid expiryTimeMinutes value
    pub default_expiry_minutes: u64,
    /// Maximum upload size in megabytes
    pub max_file_size_mb: usize,
    /// Background sweep interval in seconds
    pub sweep_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8888)
    /// - `DEFAULT_EXPIRY_MINUTES` - Default file expiration (default: 10)
    /// - `MAX_FILE_SIZE_MB` - Max upload size in MB (default: 1024)
    /// - `SWEEP_INTERVAL_SECS` - Reaper frequency in seconds (default: 60)
    ///
    /// Log verbosity is controlled separately through `RUST_LOG`.
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8888),
            default_expiry_minutes: env::var("DEFAULT_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_file_size_mb: env::var("MAX_FILE_SIZE_MB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8888,
            default_expiry_minutes: 10,
            max_file_size_mb: 1024,
            sweep_interval_secs: 60,
        }
    }
}
