//! Sync service configuration

use serde::{Deserialize, Serialize};

/// Cache sizing for the snapshot memoization layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Seconds a trimester snapshot stays fresh
    pub cache_ttl_secs: u64,
    /// Maximum number of cached snapshots
    pub cache_capacity: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
            cache_capacity: 1000,
        }
    }
}

impl SyncConfig {
    /// Parse from a TOML document
    ///
    /// # Errors
    /// Returns the underlying parse error for an invalid document.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}
