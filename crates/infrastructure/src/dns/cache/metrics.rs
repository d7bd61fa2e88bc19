use rootwalk_application::ports::CacheMetricsSnapshot;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    /// Stale entries removed by a lookup.
    pub lazy_expirations: AtomicU64,
    /// Stale entries removed by the periodic sweep.
    pub swept: AtomicU64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(AtomicOrdering::Relaxed) as f64;
        let total = hits + self.misses.load(AtomicOrdering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }

    pub fn snapshot(&self, entries: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            entries,
            hits: self.hits.load(AtomicOrdering::Relaxed),
            misses: self.misses.load(AtomicOrdering::Relaxed),
            insertions: self.insertions.load(AtomicOrdering::Relaxed),
            lazy_expirations: self.lazy_expirations.load(AtomicOrdering::Relaxed),
            swept: self.swept.load(AtomicOrdering::Relaxed),
            hit_rate: self.hit_rate(),
        }
    }
}
