#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::Message;
use rootwalk_application::ports::{
    CacheMetricsSnapshot, CachedResponse, DnsResolver, FallbackForwarder, ResponseCachePort,
};
use rootwalk_domain::{DomainError, DomainName};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<String, Message>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    call_count: Arc<AtomicU64>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            errors: Arc::new(RwLock::new(HashMap::new())),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_response(&self, domain: &str, message: Message) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), message);
    }

    pub async fn set_error(&self, domain: &str, error: DomainError) {
        self.errors.write().await.insert(domain.to_string(), error);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, domain: &DomainName) -> Result<Message, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if let Some(error) = self.errors.read().await.get(domain.as_str()) {
            return Err(error.clone());
        }

        self.responses
            .read()
            .await
            .get(domain.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NoReachableServer {
                domain: domain.to_string(),
            })
    }
}

#[derive(Clone)]
pub struct MockForwarder {
    response: Arc<RwLock<Option<Message>>>,
    call_count: Arc<AtomicU64>,
    last_query_id: Arc<Mutex<Option<u16>>>,
}

impl MockForwarder {
    pub fn new() -> Self {
        Self {
            response: Arc::new(RwLock::new(None)),
            call_count: Arc::new(AtomicU64::new(0)),
            last_query_id: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn set_response(&self, message: Message) {
        *self.response.write().await = Some(message);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_query_id(&self) -> Option<u16> {
        *self.last_query_id.lock().unwrap()
    }
}

impl Default for MockForwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FallbackForwarder for MockForwarder {
    async fn forward(&self, query: &Message) -> Result<Message, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_query_id.lock().unwrap() = Some(query.id());

        self.response
            .read()
            .await
            .clone()
            .ok_or_else(|| DomainError::QueryTimeout {
                server: self.server_name(),
            })
    }

    fn server_name(&self) -> String {
        "mock-forwarder".to_string()
    }
}

/// In-memory cache that never expires.
pub struct MockResponseCache {
    entries: Mutex<HashMap<DomainName, Message>>,
    store_count: AtomicU64,
    remaining_ttl: Duration,
}

impl MockResponseCache {
    pub fn new() -> Self {
        Self::with_remaining_ttl(Duration::from_secs(300))
    }

    pub fn with_remaining_ttl(remaining_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            store_count: AtomicU64::new(0),
            remaining_ttl,
        }
    }

    pub fn store_count(&self) -> u64 {
        self.store_count.load(Ordering::Relaxed)
    }

    pub fn get(&self, domain: &str) -> Option<Message> {
        let key = DomainName::new(domain).unwrap();
        self.entries.lock().unwrap().get(&key).cloned()
    }
}

impl Default for MockResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseCachePort for MockResponseCache {
    fn lookup(&self, domain: &DomainName) -> Option<CachedResponse> {
        self.entries
            .lock()
            .unwrap()
            .get(domain)
            .cloned()
            .map(|message| CachedResponse {
                message,
                remaining_ttl: self.remaining_ttl,
            })
    }

    fn store(&self, domain: &DomainName, message: Message) {
        self.store_count.fetch_add(1, Ordering::Relaxed);
        self.entries.lock().unwrap().insert(domain.clone(), message);
    }

    fn evict(&self, domain: &DomainName) -> bool {
        self.entries.lock().unwrap().remove(domain).is_some()
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            entries: self.len(),
            ..Default::default()
        }
    }
}
