mod cache;
mod errors;
mod logging;
mod resolver;
mod root;
mod server;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverSection;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
