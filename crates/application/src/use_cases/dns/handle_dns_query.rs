use crate::ports::{DnsResolver, FallbackForwarder, ResponseCachePort};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use rootwalk_domain::{DomainError, DomainName, ResolutionMode};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Which path produced the message handed back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Cache,
    Iterative,
    Forwarder,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::Cache => "cache",
            AnswerSource::Iterative => "iterative",
            AnswerSource::Forwarder => "forwarder",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DnsAnswer {
    /// Response carrying the client's own transaction id.
    pub message: Message,
    pub source: AnswerSource,
}

/// Query coordinator: cache first, then iterative resolution, then the public forwarder.
pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
    forwarder: Arc<dyn FallbackForwarder>,
    cache: Option<Arc<dyn ResponseCachePort>>,
    mode: ResolutionMode,
    rewrite_cached_ttl: bool,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        resolver: Arc<dyn DnsResolver>,
        forwarder: Arc<dyn FallbackForwarder>,
        mode: ResolutionMode,
    ) -> Self {
        Self {
            resolver,
            forwarder,
            cache: None,
            mode,
            rewrite_cached_ttl: false,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResponseCachePort>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_cached_ttl_rewrite(mut self, enabled: bool) -> Self {
        self.rewrite_cached_ttl = enabled;
        self
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub async fn execute(&self, query: &Message) -> Result<DnsAnswer, DomainError> {
        let start = Instant::now();
        let domain = Self::question_domain(query)?;
        let client_id = query.id();

        debug!(domain = %domain, id = client_id, "Query received");

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.lookup(&domain) {
                let remaining = hit.remaining_secs();
                let mut message = if self.rewrite_cached_ttl {
                    Self::rewrite_answer_ttl(hit.message, remaining)
                } else {
                    hit.message
                };
                Self::set_transaction_id(&mut message, client_id);

                debug!(
                    domain = %domain,
                    remaining_ttl = remaining,
                    "Answered from cache"
                );

                return Ok(DnsAnswer {
                    message,
                    source: AnswerSource::Cache,
                });
            }
        }

        let (mut message, source) = self.resolve_uncached(&domain, query).await?;

        if let Some(cache) = &self.cache {
            if message.response_code() == ResponseCode::NXDomain {
                debug!(domain = %domain, "NXDOMAIN response not cached");
            } else {
                cache.store(&domain, message.clone());
            }
        }

        Self::set_transaction_id(&mut message, client_id);

        info!(
            domain = %domain,
            source = source.as_str(),
            answers = message.answers().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query resolved"
        );

        Ok(DnsAnswer { message, source })
    }

    async fn resolve_uncached(
        &self,
        domain: &DomainName,
        query: &Message,
    ) -> Result<(Message, AnswerSource), DomainError> {
        if self.mode == ResolutionMode::Iterative {
            match self.resolver.resolve(domain).await {
                Ok(message) => return Ok((message, AnswerSource::Iterative)),
                Err(e) => {
                    warn!(
                        domain = %domain,
                        error = %e,
                        fallback = %self.forwarder.server_name(),
                        "Iterative resolution failed, using public resolver"
                    );
                }
            }
        }

        match self.forwarder.forward(query).await {
            Ok(message) => Ok((message, AnswerSource::Forwarder)),
            Err(e) => {
                warn!(domain = %domain, error = %e, "Fallback forwarding failed");
                Err(DomainError::NoValidResponse {
                    domain: domain.to_string(),
                })
            }
        }
    }

    fn question_domain(query: &Message) -> Result<DomainName, DomainError> {
        let question = query
            .queries()
            .first()
            .ok_or_else(|| DomainError::Malformed("query carries no question".to_string()))?;
        DomainName::new(&question.name().to_utf8())
    }

    fn set_transaction_id(message: &mut Message, id: u16) {
        let mut header = **message;
        header.set_id(id);
        message.set_header(header);
    }

    fn rewrite_answer_ttl(mut message: Message, ttl: u32) -> Message {
        let answers: Vec<Record> = message
            .take_answers()
            .into_iter()
            .map(|mut record| {
                record.set_ttl(ttl);
                record
            })
            .collect();
        message.insert_answers(answers);
        message
    }
}
