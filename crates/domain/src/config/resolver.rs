use super::errors::ConfigError;
use crate::resolver_config::{
    ResolutionMode, ResolverConfig, DEFAULT_MAX_HOPS, DEFAULT_MAX_RECURSION_DEPTH,
    DEFAULT_QUERY_PORT, DEFAULT_ROOT_SERVERS,
};
use crate::server_set::ServerSet;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// `[resolver]` section of the configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverSection {
    #[serde(default)]
    pub mode: ResolutionMode,

    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    #[serde(default = "default_max_hops")]
    pub max_hops: u32,

    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_query_port")]
    pub query_port: u16,

    #[serde(default = "default_max_recursion_depth")]
    pub max_recursion_depth: usize,

    #[serde(default = "default_public_resolver")]
    pub public_resolver: String,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self {
            mode: ResolutionMode::default(),
            root_servers: default_root_servers(),
            max_hops: default_max_hops(),
            query_timeout: default_query_timeout(),
            query_port: default_query_port(),
            max_recursion_depth: default_max_recursion_depth(),
            public_resolver: default_public_resolver(),
        }
    }
}

impl ResolverSection {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }

    pub fn root_server_set(&self) -> Result<ServerSet, ConfigError> {
        self.root_servers
            .iter()
            .map(|s| {
                s.trim().parse::<Ipv4Addr>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid root server '{}': {}", s, e))
                })
            })
            .collect()
    }

    pub fn public_resolver_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.public_resolver.parse().map_err(|e| {
            ConfigError::Validation(format!(
                "Invalid public resolver '{}': {}",
                self.public_resolver, e
            ))
        })
    }

    /// Build the immutable resolver settings out of this section.
    pub fn resolver_config(&self) -> Result<ResolverConfig, ConfigError> {
        Ok(ResolverConfig {
            root_servers: self.root_server_set()?,
            max_hops: self.max_hops,
            query_timeout: self.query_timeout(),
            query_port: self.query_port,
            max_recursion_depth: self.max_recursion_depth,
            mode: self.mode,
        })
    }
}

fn default_root_servers() -> Vec<String> {
    DEFAULT_ROOT_SERVERS.iter().map(|ip| ip.to_string()).collect()
}

fn default_max_hops() -> u32 {
    DEFAULT_MAX_HOPS
}

fn default_query_timeout() -> u64 {
    5000
}

fn default_query_port() -> u16 {
    DEFAULT_QUERY_PORT
}

fn default_max_recursion_depth() -> usize {
    DEFAULT_MAX_RECURSION_DEPTH
}

fn default_public_resolver() -> String {
    "8.8.8.8:53".to_string()
}
