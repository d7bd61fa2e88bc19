pub mod cache;
pub mod cache_maintenance;
pub mod forwarding;
pub mod resolver;
pub mod server;
pub mod transport;

pub use cache::{CacheMetrics, ResponseCache};
pub use cache_maintenance::DnsCacheMaintenance;
pub use forwarding::PublicDnsForwarder;
pub use resolver::IterativeResolver;
pub use server::DnsServerHandler;
