//! Tournament registration server.
//!
//! Serves the registration API over HTTP, validating player names against
//! the configured catalog.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Error};
use log::info;
use pico_args::Arguments;
use tourney::{RegistrationPipeline, Store, UpstreamClient};
use tourney_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging, metrics,
};

const HELP: &str = "\
Run the tournament registration server

USAGE:
  tourney_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:3000]
  --upstream   URL         Catalog base URL            [default: env UPSTREAM_BASE_URL or https://pokeapi.co/api/v2/pokemon]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  UPSTREAM_BASE_URL        Catalog base URL
  UPSTREAM_MAX_CONCURRENT  Maximum simultaneous catalog calls [default: 10]
  UPSTREAM_TIMEOUT_MS      Per-call catalog timeout in milliseconds [default: 10000]
  UPSTREAM_CACHE_CAPACITY  Maximum cached names [default: unbounded]
  METRICS_BIND             Prometheus exporter address [default: disabled]
  RUST_LOG                 Log filter [default: info,hyper=warn,reqwest=warn]
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind: Option<SocketAddr> = pargs
        .opt_value_from_str("--bind")
        .context("Invalid --bind address")?;
    let upstream: Option<String> = pargs
        .opt_value_from_str("--upstream")
        .context("Invalid --upstream URL")?;

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {:?}", remaining);
    }

    logging::init();

    let config = ServerConfig::from_env(bind, upstream).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(|e| anyhow::anyhow!(e))?;
        info!("Prometheus metrics exported at http://{}/metrics", metrics_bind);
    }

    info!(
        "Using catalog {} (max {} concurrent, timeout {:?}, cache {})",
        config.upstream.base_url,
        config.upstream.max_concurrent,
        config.upstream.request_timeout,
        config
            .upstream
            .cache_capacity
            .map_or_else(|| "unbounded".to_string(), |n| n.to_string())
    );

    let upstream =
        UpstreamClient::from_config(&config.upstream).context("Failed to build catalog client")?;
    let pipeline = RegistrationPipeline::new(Arc::new(Store::new()), Arc::new(upstream));

    let app = api::create_router(AppState::new(pipeline));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for CTRL+C: {}", e);
        std::future::pending::<()>().await;
    }
}
