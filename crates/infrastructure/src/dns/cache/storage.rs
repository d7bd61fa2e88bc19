use super::{CacheEntry, CacheMetrics};
use dashmap::DashMap;
use hickory_proto::op::Message;
use rootwalk_application::ports::{CacheMetricsSnapshot, CachedResponse, ResponseCachePort};
use rootwalk_domain::DomainName;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Domain-keyed store of complete responses with a single cache-wide TTL.
///
/// Record TTLs inside the stored messages are ignored: an entry is fresh for
/// exactly `ttl` after its last `store`.
pub struct ResponseCache {
    entries: DashMap<DomainName, CacheEntry, FxBuildHasher>,
    ttl: Duration,
    metrics: Arc<CacheMetrics>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        info!(ttl_secs = ttl.as_secs(), "Initializing response cache");

        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            ttl,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn lookup(&self, domain: &DomainName) -> Option<CachedResponse> {
        let now = Instant::now();

        let hit = match self.entries.get(domain) {
            Some(entry) => entry
                .remaining(self.ttl, now)
                .map(|remaining_ttl| CachedResponse {
                    message: entry.message.clone(),
                    remaining_ttl,
                }),
            None => {
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                return None;
            }
        };

        if hit.is_some() {
            self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
            return hit;
        }

        // A store may have refreshed the entry since the read guard was dropped.
        if self
            .entries
            .remove_if(domain, |_, entry| entry.is_stale(self.ttl, now))
            .is_some()
        {
            self.metrics
                .lazy_expirations
                .fetch_add(1, AtomicOrdering::Relaxed);
            debug!(domain = %domain, "Stale cache entry removed on lookup");
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    pub fn store(&self, domain: &DomainName, message: Message) {
        self.entries
            .insert(domain.clone(), CacheEntry::new(message, Instant::now()));
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub fn evict(&self, domain: &DomainName) -> bool {
        self.entries.remove(domain).is_some()
    }

    /// Remove every stale entry, returning how many were removed.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0usize;

        self.entries.retain(|_, entry| {
            let keep = !entry.is_stale(self.ttl, now);
            if !keep {
                removed += 1;
            }
            keep
        });

        if removed > 0 {
            self.metrics
                .swept
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);

            debug!(
                removed,
                cache_size = self.entries.len(),
                "Cache sweep completed"
            );
        }

        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.entries.len())
    }
}

impl ResponseCachePort for ResponseCache {
    fn lookup(&self, domain: &DomainName) -> Option<CachedResponse> {
        ResponseCache::lookup(self, domain)
    }

    fn store(&self, domain: &DomainName, message: Message) {
        ResponseCache::store(self, domain, message)
    }

    fn evict(&self, domain: &DomainName) -> bool {
        ResponseCache::evict(self, domain)
    }

    fn len(&self) -> usize {
        ResponseCache::len(self)
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics()
    }
}
