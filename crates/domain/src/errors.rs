use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed DNS message: {0}")]
    Malformed(String),

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("No reachable server while resolving {domain}")]
    NoReachableServer { domain: String },

    #[error("No usable delegation for {domain}")]
    NoDelegation { domain: String },

    #[error("Hop limit of {max_hops} exceeded while resolving {domain}")]
    HopLimitExceeded { domain: String, max_hops: u32 },

    #[error("Resolution cycle detected at {domain}")]
    ResolutionCycle { domain: String },

    #[error("Recursion depth {depth} exceeded while resolving {domain}")]
    RecursionDepthExceeded { domain: String, depth: usize },

    #[error("No valid response for {domain}")]
    NoValidResponse { domain: String },
}
