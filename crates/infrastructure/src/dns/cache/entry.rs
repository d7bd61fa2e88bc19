use hickory_proto::op::Message;
use std::time::Duration;
use tokio::time::Instant;

/// A stored response and the moment it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub message: Message,
    pub inserted_at: Instant,
}

impl CacheEntry {
    pub fn new(message: Message, inserted_at: Instant) -> Self {
        Self {
            message,
            inserted_at,
        }
    }

    /// Lifetime left under `ttl`, or `None` once `now - inserted_at >= ttl`.
    #[inline]
    pub fn remaining(&self, ttl: Duration, now: Instant) -> Option<Duration> {
        let age = now.saturating_duration_since(self.inserted_at);
        ttl.checked_sub(age).filter(|left| !left.is_zero())
    }

    #[inline]
    pub fn is_stale(&self, ttl: Duration, now: Instant) -> bool {
        self.remaining(ttl, now).is_none()
    }
}
