//! github-keys server binary.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use github_keys_server::cache::KeyCache;
use github_keys_server::config::{Cli, LogFormat};
use github_keys_server::metrics::init_metrics;
use github_keys_server::{AppState, run_server};
use github_keys_source::GitHubKeySource;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing --username exits here with a usage message.
    let config = Cli::parse().into_config()?;

    // Initialize tracing
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));
    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }

    tracing::info!("Starting github-keys v{}", github_keys_server::version());

    if let Some(addr) = config.metrics_listen {
        init_metrics(addr).context("failed to start metrics exporter")?;
    }

    let source = GitHubKeySource::new(config.source.clone()).context("failed to build key source")?;
    let cache = Arc::new(KeyCache::new(
        config.username.clone(),
        Arc::new(source),
        config.cache.clone(),
    ));

    // Nothing can be served until the first fetch succeeds.
    let count = cache
        .prime()
        .await
        .with_context(|| format!("initial key fetch for user \"{}\" failed", config.username))?;

    tracing::info!(
        username = %cache.identity(),
        listen = %config.listen,
        ttl_seconds = cache.ttl_seconds(),
        keys = count,
        "Starting server"
    );

    run_server(&config.listen, AppState::new(cache))
        .await
        .with_context(|| format!("HTTP server on {} failed", config.listen))?;

    Ok(())
}
