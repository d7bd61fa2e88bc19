use clap::Parser;
use rootwalk_domain::{CliOverrides, ResolutionMode};
use rootwalk_jobs::{CacheMaintenanceJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version = "0.1.0")]
#[command(about = "rootwalk - caching iterative DNS resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Resolution mode (iterative, forward_only)
    #[arg(short = 'm', long)]
    mode: Option<ResolutionMode>,

    /// Public resolver used as fallback (ip:port)
    #[arg(long)]
    public_resolver: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        mode: cli.mode,
        public_resolver: cli.public_resolver.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting rootwalk v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = CancellationToken::new();
    let dns_services = di::DnsServices::new(&config)?;

    let mut jobs = JobRunner::new().with_shutdown_token(shutdown.clone());
    if let Some(maintenance) = dns_services.cache_maintenance.clone() {
        jobs = jobs.with_cache_maintenance(
            CacheMaintenanceJob::new(maintenance).with_interval(config.cache.sweep_interval()),
        );
    }
    jobs.start().await;

    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
        }
        ctrl_c_token.cancel();
    });

    server::start_dns_server(
        config.server.listen_address(),
        dns_services.handler,
        shutdown,
    )
    .await?;

    if let Some(cache) = &dns_services.cache {
        let metrics = cache.metrics();
        info!(
            entries = metrics.entries,
            hits = metrics.hits,
            misses = metrics.misses,
            hit_rate = format!("{:.1}%", metrics.hit_rate),
            "Final cache statistics"
        );
    }

    info!("Server shutdown complete");
    Ok(())
}
