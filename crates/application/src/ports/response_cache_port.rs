use hickory_proto::op::Message;
use rootwalk_domain::DomainName;
use std::time::Duration;

/// A fresh cache hit.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub message: Message,
    pub remaining_ttl: Duration,
}

impl CachedResponse {
    /// Remaining lifetime rounded down to whole seconds.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ttl.as_secs().min(u32::MAX as u64) as u32
    }
}

/// Snapshot of response cache metrics.
#[derive(Debug, Clone, Default)]
pub struct CacheMetricsSnapshot {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub lazy_expirations: u64,
    pub swept: u64,
    pub hit_rate: f64,
}

/// Port for the response cache consulted by the query coordinator.
pub trait ResponseCachePort: Send + Sync {
    /// Fresh entry for `domain`, if any. A stale entry is removed and reported as a miss.
    fn lookup(&self, domain: &DomainName) -> Option<CachedResponse>;

    /// Insert or overwrite the entry for `domain`, stamped with the current time.
    fn store(&self, domain: &DomainName, message: Message);

    fn evict(&self, domain: &DomainName) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot;
}
