#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::Record;
use rootwalk_domain::DomainError;
use rootwalk_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How a simulated server reacts to one question.
pub enum ServerReply {
    Answer(Vec<Record>),
    Referral {
        authority: Vec<Record>,
        glue: Vec<Record>,
    },
    Empty,
    NxDomain,
    Timeout,
    Garbage,
    /// Answer carrying a transaction id other than the query's.
    WrongId(Vec<Record>),
}

type Behaviour = Arc<dyn Fn(&str) -> ServerReply + Send + Sync>;

/// In-memory DNS hierarchy. Servers without a registered behaviour time out.
pub struct MockTransport {
    servers: Mutex<HashMap<Ipv4Addr, Behaviour>>,
    calls: Mutex<Vec<(Ipv4Addr, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            servers: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register a server; the behaviour receives the lowercase question name
    /// without the trailing dot.
    pub fn with_server(
        self,
        ip: &str,
        behaviour: impl Fn(&str) -> ServerReply + Send + Sync + 'static,
    ) -> Self {
        self.servers
            .lock()
            .unwrap()
            .insert(ip.parse().unwrap(), Arc::new(behaviour));
        self
    }

    pub fn calls(&self) -> Vec<(Ipv4Addr, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, ip: &str) -> usize {
        let ip: Ipv4Addr = ip.parse().unwrap();
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(server, _)| *server == ip)
            .count()
    }

    fn build_reply(query: &Message, reply: ServerReply) -> Message {
        let mut message = Message::new(query.id(), MessageType::Response, query.op_code());
        for question in query.queries() {
            message.add_query(question.clone());
        }

        match reply {
            ServerReply::Answer(records) => {
                for record in records {
                    message.add_answer(record);
                }
            }
            ServerReply::Referral { authority, glue } => {
                for record in authority {
                    message.add_name_server(record);
                }
                for record in glue {
                    message.add_additional(record);
                }
            }
            ServerReply::Empty => {}
            ServerReply::NxDomain => {
                message.set_response_code(ResponseCode::NXDomain);
            }
            ServerReply::WrongId(records) => {
                let mut header = *message;
                header.set_id(query.id().wrapping_add(1));
                message.set_header(header);
                for record in records {
                    message.add_answer(record);
                }
            }
            ServerReply::Timeout | ServerReply::Garbage => {}
        }

        message
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let query =
            Message::from_vec(message_bytes).map_err(|e| DomainError::Malformed(e.to_string()))?;
        let qname = query
            .queries()
            .first()
            .map(|q| q.name().to_utf8().trim_end_matches('.').to_ascii_lowercase())
            .unwrap_or_default();

        let ip = match server.ip() {
            IpAddr::V4(ip) => ip,
            IpAddr::V6(_) => return Err(DomainError::IoError("IPv6 not simulated".to_string())),
        };

        self.calls.lock().unwrap().push((ip, qname.clone()));

        let behaviour = self.servers.lock().unwrap().get(&ip).cloned();
        let Some(behaviour) = behaviour else {
            return Err(DomainError::QueryTimeout {
                server: server.to_string(),
            });
        };

        let bytes = match behaviour(&qname) {
            ServerReply::Timeout => {
                return Err(DomainError::QueryTimeout {
                    server: server.to_string(),
                })
            }
            ServerReply::Garbage => vec![0xde, 0xad, 0xbe],
            reply => Self::build_reply(&query, reply).to_vec().unwrap(),
        };

        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
