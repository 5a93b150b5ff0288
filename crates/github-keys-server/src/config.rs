//! Command line and environment configuration.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};
use github_keys_source::{DEFAULT_URL_TEMPLATE, KeySourceConfig, KeySourceError};
use thiserror::Error;

use crate::cache::CacheConfig;

/// Errors raised while validating the startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--username must not be empty")]
    EmptyUsername,

    #[error("invalid key source: {0}")]
    Source(#[from] KeySourceError),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "github-keys",
    version,
    about = "Serve a GitHub user's public keys from a local TTL cache"
)]
pub struct Cli {
    /// "[address]:<port>" to bind to.
    #[arg(long, env = "GITHUB_KEYS_LISTEN", default_value = ":8000")]
    pub listen: String,

    /// GitHub username to fetch keys for.
    #[arg(long, env = "GITHUB_KEYS_USERNAME")]
    pub username: String,

    /// Time in seconds to cache keys for.
    #[arg(long, env = "GITHUB_KEYS_TTL", default_value_t = 86_400)]
    pub ttl: u64,

    /// Upstream endpoint; "{username}" is replaced by the username.
    #[arg(long, env = "GITHUB_KEYS_URL", default_value = DEFAULT_URL_TEMPLATE)]
    pub keys_url: String,

    /// User-Agent header sent upstream. Defaults to "github-keys/<version>".
    #[arg(long, env = "GITHUB_KEYS_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Address for the Prometheus exporter. Disabled when unset.
    #[arg(long, env = "GITHUB_KEYS_METRICS_LISTEN")]
    pub metrics_listen: Option<SocketAddr>,

    #[arg(long, env = "GITHUB_KEYS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen: String,
    pub username: String,
    pub cache: CacheConfig,
    pub source: KeySourceConfig,
    pub metrics_listen: Option<SocketAddr>,
    pub log_format: LogFormat,
}

impl Cli {
    /// Validates the parsed arguments.
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let username = self.username.trim().to_string();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }

        let mut builder = KeySourceConfig::builder().url_template(self.keys_url);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let source = builder.build()?;

        Ok(ServerConfig {
            listen: self.listen,
            username,
            cache: CacheConfig {
                ttl_seconds: self.ttl,
            },
            source,
            metrics_listen: self.metrics_listen,
            log_format: self.log_format,
        })
    }
}
