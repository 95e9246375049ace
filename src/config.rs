//! Configuration Module
//!
//! Handles loading and managing volume info settings from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_MS};
use crate::tasks::DEFAULT_UPDATE_PERIOD_MS;

/// Volume info configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of volume entries the cache can hold
    pub cache_capacity: usize,
    /// Time-to-live of a cached volume snapshot in milliseconds
    pub ttl_ms: u64,
    /// Period of the status auto-update ticker in milliseconds
    pub update_period_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `VOLINFO_CACHE_CAPACITY` - Maximum cached volumes (default: 50)
    /// - `VOLINFO_TTL_MS` - Snapshot TTL in milliseconds (default: 60000)
    /// - `VOLINFO_UPDATE_PERIOD_MS` - Ticker period in milliseconds (default: 60000)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("VOLINFO_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_CAPACITY),
            ttl_ms: env::var("VOLINFO_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_MS),
            update_period_ms: env::var("VOLINFO_UPDATE_PERIOD_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_UPDATE_PERIOD_MS),
        }
    }

    /// Returns the snapshot TTL as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Returns the ticker period as a [`Duration`].
    pub fn update_period(&self) -> Duration {
        Duration::from_millis(self.update_period_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            ttl_ms: DEFAULT_TTL_MS,
            update_period_ms: DEFAULT_UPDATE_PERIOD_MS,
        }
    }
}
