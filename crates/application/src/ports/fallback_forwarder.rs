use async_trait::async_trait;
use hickory_proto::op::Message;
use rootwalk_domain::DomainError;

/// Single round trip to a fixed public resolver.
#[async_trait]
pub trait FallbackForwarder: Send + Sync {
    async fn forward(&self, query: &Message) -> Result<Message, DomainError>;

    fn server_name(&self) -> String;
}
