use async_trait::async_trait;
use hickory_proto::op::Message;
use rootwalk_domain::{DomainError, DomainName};

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolve `domain` to a complete, ready-to-send response.
    ///
    /// The returned message carries the resolver's own transaction id; callers
    /// rewrite it before replying to a client.
    async fn resolve(&self, domain: &DomainName) -> Result<Message, DomainError>;
}
