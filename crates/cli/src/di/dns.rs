use rootwalk_application::ports::CacheMaintenancePort;
use rootwalk_application::use_cases::HandleDnsQueryUseCase;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{
    transport::{DnsTransport, UdpTransport},
    DnsCacheMaintenance, DnsServerHandler, IterativeResolver, PublicDnsForwarder, ResponseCache,
};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: Arc<DnsServerHandler>,
    pub cache: Option<Arc<ResponseCache>>,
    pub cache_maintenance: Option<Arc<dyn CacheMaintenancePort>>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver_config = config.resolver.resolver_config()?;
        let public_resolver = config.resolver.public_resolver_addr()?;
        let mode = resolver_config.mode;

        info!(
            mode = %mode,
            root_servers = resolver_config.root_servers.len(),
            public_resolver = %public_resolver,
            "Initializing DNS services"
        );

        let transport: Arc<dyn DnsTransport> = Arc::new(UdpTransport::new());

        let resolver = Arc::new(IterativeResolver::new(
            transport.clone(),
            resolver_config.clone(),
        ));
        let forwarder = Arc::new(PublicDnsForwarder::new(
            transport,
            public_resolver,
            resolver_config.query_timeout,
        ));

        let mut use_case = HandleDnsQueryUseCase::new(resolver, forwarder, mode)
            .with_cached_ttl_rewrite(config.cache.rewrite_answer_ttl);

        let (cache, cache_maintenance) = if config.cache.enabled {
            let cache = Arc::new(ResponseCache::new(config.cache.ttl()));
            use_case = use_case.with_cache(cache.clone());

            let maintenance: Arc<dyn CacheMaintenancePort> =
                Arc::new(DnsCacheMaintenance::new(cache.clone()));
            (Some(cache), Some(maintenance))
        } else {
            info!("Response cache disabled");
            (None, None)
        };

        Ok(Self {
            handler: Arc::new(DnsServerHandler::new(Arc::new(use_case))),
            cache,
            cache_maintenance,
        })
    }
}
