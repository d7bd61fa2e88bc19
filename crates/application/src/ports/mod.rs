mod cache_maintenance_port;
mod dns_resolver;
mod fallback_forwarder;
mod response_cache_port;

pub use cache_maintenance_port::{CacheMaintenancePort, CacheSweepOutcome};
pub use dns_resolver::DnsResolver;
pub use fallback_forwarder::FallbackForwarder;
pub use response_cache_port::{CacheMetricsSnapshot, CachedResponse, ResponseCachePort};
