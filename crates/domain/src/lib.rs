//! rootwalk Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod resolver_config;
pub mod server_set;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordType, ResourceRecord};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use resolver_config::{ResolutionMode, ResolverConfig};
pub use server_set::ServerSet;
