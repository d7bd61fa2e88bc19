use crate::server_set::ServerSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

pub const DEFAULT_MAX_HOPS: u32 = 10;
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_QUERY_PORT: u16 = 53;
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 8;

pub const DEFAULT_ROOT_SERVERS: [Ipv4Addr; 5] = [
    Ipv4Addr::new(198, 41, 0, 4),
    Ipv4Addr::new(199, 9, 14, 201),
    Ipv4Addr::new(192, 33, 4, 12),
    Ipv4Addr::new(199, 7, 91, 13),
    Ipv4Addr::new(192, 203, 230, 10),
];

/// How a cache miss is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// Walk the hierarchy from the roots; forward to the public resolver only on failure.
    #[default]
    Iterative,
    /// Always forward to the public resolver.
    ForwardOnly,
}

impl ResolutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMode::Iterative => "iterative",
            ResolutionMode::ForwardOnly => "forward_only",
        }
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResolutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "iterative" => Ok(ResolutionMode::Iterative),
            "forward_only" | "forward" => Ok(ResolutionMode::ForwardOnly),
            _ => Err(format!("Unknown resolution mode: {}", s)),
        }
    }
}

/// Immutable settings of the iterative resolver, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub root_servers: ServerSet,
    pub max_hops: u32,
    pub query_timeout: Duration,
    pub query_port: u16,
    /// Maximum nesting of CNAME / NS-target sub-resolutions below one top-level query.
    pub max_recursion_depth: usize,
    pub mode: ResolutionMode,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: DEFAULT_ROOT_SERVERS.into_iter().collect(),
            max_hops: DEFAULT_MAX_HOPS,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            query_port: DEFAULT_QUERY_PORT,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            mode: ResolutionMode::Iterative,
        }
    }
}

impl ResolverConfig {
    pub fn with_root_servers(mut self, root_servers: ServerSet) -> Self {
        self.root_servers = root_servers;
        self
    }

    pub fn with_max_hops(mut self, max_hops: u32) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_query_port(mut self, port: u16) -> Self {
        self.query_port = port;
        self
    }

    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }
}
