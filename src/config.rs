//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::api::DEFAULT_BASE_PATH;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-group byte budget for cached keys + values (0 = unbounded)
    pub cache_budget_bytes: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Path prefix the peer endpoint serves under
    pub base_path: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_BUDGET_BYTES` - Per-group byte budget, 0 = unbounded (default: 1 MiB)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `BASE_PATH` - Peer endpoint path prefix (default: "/_cache/")
    pub fn from_env() -> Self {
        Self {
            cache_budget_bytes: env::var("CACHE_BUDGET_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024 * 1024),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            base_path: env::var("BASE_PATH").unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_budget_bytes: 1024 * 1024,
            server_port: 3000,
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}
