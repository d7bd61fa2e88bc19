use crate::dns::forwarding::MessageBuilder;
use hickory_proto::op::{Message, MessageType};
use rootwalk_application::use_cases::HandleDnsQueryUseCase;
use rootwalk_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Turns one inbound datagram into the bytes of its reply.
///
/// `None` means nothing is sent back: unparsable datagrams, stray responses and
/// queries no path could answer are dropped.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_datagram(&self, datagram: &[u8]) -> Option<Vec<u8>> {
        let query = match Message::from_vec(datagram) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, bytes = datagram.len(), "Dropping unparsable datagram");
                return None;
            }
        };

        if query.message_type() != MessageType::Query {
            debug!(id = query.id(), "Dropping datagram that is not a query");
            return None;
        }

        let answer = match self.use_case.execute(&query).await {
            Ok(answer) => answer,
            Err(DomainError::NoValidResponse { domain }) => {
                warn!(domain = %domain, "No valid response, query dropped");
                return None;
            }
            Err(e) => {
                debug!(id = query.id(), error = %e, "Query dropped");
                return None;
            }
        };

        match MessageBuilder::serialize_message(&answer.message) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, "Failed to serialize response");
                None
            }
        }
    }
}
