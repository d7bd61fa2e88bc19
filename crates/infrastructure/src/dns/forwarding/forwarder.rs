use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use hickory_proto::op::Message;
use rootwalk_application::ports::FallbackForwarder;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Forwards client questions to a recursive public resolver.
pub struct PublicDnsForwarder {
    transport: Arc<dyn DnsTransport>,
    server: SocketAddr,
    timeout: Duration,
}

impl PublicDnsForwarder {
    pub fn new(transport: Arc<dyn DnsTransport>, server: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport,
            server,
            timeout,
        }
    }
}

#[async_trait]
impl FallbackForwarder for PublicDnsForwarder {
    async fn forward(&self, query: &Message) -> Result<Message, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_forward_query(query)?;

        debug!(server = %self.server, id = id, "Forwarding query to public resolver");

        let reply = self
            .transport
            .send(self.server, &request_bytes, self.timeout)
            .await?;

        debug!(
            server = %self.server,
            protocol = reply.protocol_used,
            bytes = reply.bytes.len(),
            "Public resolver replied"
        );

        let response = ResponseParser::parse(&reply.bytes)?;

        if response.message.id() != id {
            return Err(DomainError::Malformed(format!(
                "reply id {} from {} does not match query id {}",
                response.message.id(),
                self.server,
                id
            )));
        }

        Ok(response.message)
    }

    fn server_name(&self) -> String {
        self.server.to_string()
    }
}
