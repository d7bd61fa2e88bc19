use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Lifetime of every cached response in seconds, regardless of record TTLs.
    #[serde(default = "default_cache_ttl")]
    pub ttl: u64,

    /// Seconds between two sweeps of expired entries.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval: u64,

    /// Rewrite answer TTLs to the remaining cache lifetime on a hit.
    #[serde(default)]
    pub rewrite_answer_ttl: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: default_cache_ttl(),
            sweep_interval: default_sweep_interval(),
            rewrite_answer_ttl: false,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }
}

fn default_true() -> bool {
    true
}

fn default_cache_ttl() -> u64 {
    300
}

fn default_sweep_interval() -> u64 {
    60
}
