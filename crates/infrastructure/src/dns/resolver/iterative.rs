use super::trail::ResolutionTrail;
use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use rootwalk_application::ports::DnsResolver;
use rootwalk_domain::{DomainError, DomainName, ResolverConfig, ServerSet};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, info, warn};

enum HopOutcome {
    /// Terminal message for the queried domain.
    Answer(Message),
    /// Servers to query at the next hop.
    Referral(ServerSet),
    /// At least one server replied, none with an answer or a usable delegation.
    DeadEnd,
    /// Every server failed at transport level.
    Unreachable,
}

/// Walks the DNS hierarchy from the root servers down to an authoritative answer.
pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    config: ResolverConfig,
}

impl IterativeResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, config: ResolverConfig) -> Self {
        info!(
            root_servers = config.root_servers.len(),
            max_hops = config.max_hops,
            timeout_ms = config.query_timeout.as_millis() as u64,
            protocol = transport.protocol_name(),
            "Iterative resolver created"
        );

        Self { transport, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// One complete walk from the roots. CNAME targets and glue-less NS names
    /// re-enter here with the same trail, so each name is walked at most once
    /// per top-level query.
    fn walk<'a>(
        &'a self,
        domain: &'a DomainName,
        trail: &'a mut ResolutionTrail,
    ) -> BoxFuture<'a, Result<Message, DomainError>> {
        async move {
            trail.enter(domain, self.config.max_recursion_depth)?;
            let result = self.walk_hops(domain, trail).await;
            trail.leave();
            result
        }
        .boxed()
    }

    async fn walk_hops(
        &self,
        domain: &DomainName,
        trail: &mut ResolutionTrail,
    ) -> Result<Message, DomainError> {
        let mut servers = self.config.root_servers.clone();

        for hop in 0..self.config.max_hops {
            debug!(
                domain = %domain,
                hop = hop,
                servers = servers.len(),
                depth = trail.depth(),
                "Starting hop"
            );

            match self.query_hop(domain, &servers, trail).await {
                HopOutcome::Answer(message) => return Ok(message),
                HopOutcome::Referral(next) => servers = next,
                HopOutcome::DeadEnd => {
                    warn!(domain = %domain, hop = hop, "No server delegated further");
                    return Err(DomainError::NoDelegation {
                        domain: domain.to_string(),
                    });
                }
                HopOutcome::Unreachable => {
                    warn!(domain = %domain, hop = hop, "No server reachable at this hop");
                    return Err(DomainError::NoReachableServer {
                        domain: domain.to_string(),
                    });
                }
            }
        }

        warn!(
            domain = %domain,
            max_hops = self.config.max_hops,
            "Hop limit exhausted without an answer"
        );

        Err(DomainError::HopLimitExceeded {
            domain: domain.to_string(),
            max_hops: self.config.max_hops,
        })
    }

    async fn query_hop(
        &self,
        domain: &DomainName,
        servers: &ServerSet,
        trail: &mut ResolutionTrail,
    ) -> HopOutcome {
        let mut any_replied = false;

        for ip in servers {
            let server = SocketAddr::new(IpAddr::V4(*ip), self.config.query_port);

            let response = match self.exchange(domain, server).await {
                Ok(response) => response,
                Err(e) => {
                    debug!(domain = %domain, server = %server, error = %e, "Server attempt failed");
                    continue;
                }
            };
            any_replied = true;

            if response.has_answers() {
                match self.follow_answer(domain, response, trail).await {
                    Some(message) => return HopOutcome::Answer(message),
                    None => continue,
                }
            }

            let next = self.next_servers(&response, trail).await;
            if !next.is_empty() {
                debug!(
                    domain = %domain,
                    server = %server,
                    next_servers = next.len(),
                    "Referral received"
                );
                return HopOutcome::Referral(next);
            }

            debug!(domain = %domain, server = %server, "Reply carried no usable delegation");
        }

        if any_replied {
            HopOutcome::DeadEnd
        } else {
            HopOutcome::Unreachable
        }
    }

    async fn exchange(
        &self,
        domain: &DomainName,
        server: SocketAddr,
    ) -> Result<DnsResponse, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_iterative_query(domain)?;

        let reply = self
            .transport
            .send(server, &request_bytes, self.config.query_timeout)
            .await?;

        let response = ResponseParser::parse(&reply.bytes)?;

        if response.message.id() != id {
            return Err(DomainError::Malformed(format!(
                "reply id {} does not match query id {}",
                response.message.id(),
                id
            )));
        }

        Ok(response)
    }

    /// Turn a reply with a non-empty answer section into a terminal message,
    /// chasing a CNAME owned by `domain`. `None` means the CNAME could not be
    /// followed and the next server should be tried.
    async fn follow_answer(
        &self,
        domain: &DomainName,
        response: DnsResponse,
        trail: &mut ResolutionTrail,
    ) -> Option<Message> {
        if response.has_address_for(domain) {
            info!(domain = %domain, answers = response.answers.len(), "Authoritative answer");
            return Some(response.message);
        }

        let Some(target) = response.cname_target_for(domain) else {
            info!(domain = %domain, "Terminal answer without address records");
            return Some(response.message);
        };

        debug!(domain = %domain, target = %target, "Following CNAME");

        match self.walk(&target, trail).await {
            Ok(resolved) => {
                info!(domain = %domain, target = %target, "CNAME chain resolved");
                Some(Self::splice_cname(domain, response.message, &resolved))
            }
            Err(e) => {
                debug!(domain = %domain, target = %target, error = %e, "CNAME target unresolved");
                None
            }
        }
    }

    /// Glue addresses when present, otherwise the addresses of every NS target
    /// resolved in order.
    async fn next_servers(
        &self,
        response: &DnsResponse,
        trail: &mut ResolutionTrail,
    ) -> ServerSet {
        let glue = response.glue_addresses();
        if !glue.is_empty() {
            return ServerSet::new(glue);
        }

        let mut next = ServerSet::default();

        for ns in response.delegated_name_servers() {
            debug!(name_server = %ns, "Resolving glue-less name server");

            match self.walk(&ns, trail).await {
                Ok(message) => next.extend(ResponseParser::answer_addresses(&message)),
                Err(e) => {
                    debug!(name_server = %ns, error = %e, "Name server address unresolved");
                }
            }
        }

        next
    }

    /// The reply's CNAME records for `domain` followed by the answers found for
    /// the target, under the reply's id and question.
    fn splice_cname(domain: &DomainName, mut reply: Message, resolved: &Message) -> Message {
        let mut answers: Vec<Record> = reply
            .take_answers()
            .into_iter()
            .filter(|record| {
                matches!(record.data(), RData::CNAME(_))
                    && ResponseParser::is_owned_by(record, domain)
            })
            .collect();
        answers.extend(resolved.answers().iter().cloned());

        reply.insert_answers(answers);
        reply
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, domain: &DomainName) -> Result<Message, DomainError> {
        let mut trail = ResolutionTrail::default();
        self.walk(domain, &mut trail).await
    }
}
