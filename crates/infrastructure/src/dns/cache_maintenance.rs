use super::cache::ResponseCache;

use async_trait::async_trait;
use rootwalk_application::ports::{CacheMaintenancePort, CacheSweepOutcome};
use rootwalk_domain::DomainError;
use std::sync::Arc;
use tracing::error;

/// Infrastructure adapter implementing `CacheMaintenancePort`.
pub struct DnsCacheMaintenance {
    cache: Arc<ResponseCache>,
}

impl DnsCacheMaintenance {
    pub fn new(cache: Arc<ResponseCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CacheMaintenancePort for DnsCacheMaintenance {
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError> {
        let cache_for_sweep = Arc::clone(&self.cache);
        let removed = match tokio::task::spawn_blocking(move || cache_for_sweep.sweep()).await {
            Ok(count) => count,
            Err(e) => {
                error!(error = %e, "Sweep task panicked");
                0
            }
        };

        Ok(CacheSweepOutcome {
            entries_removed: removed,
            cache_size: self.cache.len(),
        })
    }
}
