//! GitHub key source implementation.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::KeySourceConfig;
use crate::error::KeySourceError;
use crate::source::{KeyRecord, KeySource};

/// One element of the upstream response. Fields other than `key` are ignored.
#[derive(Debug, Deserialize)]
struct UpstreamKey {
    key: String,
}

/// A key source backed by the GitHub users API.
///
/// Each call to [`KeySource::fetch`] issues a single GET with no retry; the
/// only thing kept between calls is the pooled HTTP client.
pub struct GitHubKeySource {
    /// The HTTP client.
    client: reqwest::Client,
    /// The source configuration.
    config: KeySourceConfig,
}

impl GitHubKeySource {
    /// Creates a new GitHub key source with its own HTTP client.
    pub fn new(config: KeySourceConfig) -> Result<Self, KeySourceError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| KeySourceError::invalid_config(format!("HTTP client: {e}")))?;

        Ok(Self { client, config })
    }
}

/// Parses an upstream body into key records, preserving order.
fn parse_keys(uri: &str, body: &[u8]) -> Result<Vec<KeyRecord>, KeySourceError> {
    let keys: Vec<UpstreamKey> =
        serde_json::from_slice(body).map_err(|source| KeySourceError::Format {
            uri: uri.to_string(),
            source,
        })?;

    Ok(keys.into_iter().map(|k| KeyRecord::new(k.key)).collect())
}

#[async_trait]
impl KeySource for GitHubKeySource {
    async fn fetch(&self, identity: &str) -> Result<Vec<KeyRecord>, KeySourceError> {
        let uri = self.config.uri_for(identity);

        info!(%identity, "Fetching keys for user");

        let network = |source| KeySourceError::Network {
            uri: uri.clone(),
            source,
        };

        let resp = self
            .client
            .get(&uri)
            .send()
            .await
            .map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(KeySourceError::Status {
                uri: uri.clone(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(network)?;
        let keys = parse_keys(&uri, &body)?;

        debug!(%identity, count = keys.len(), "Fetched keys");

        Ok(keys)
    }

    fn name(&self) -> &str {
        "github"
    }
}

impl std::fmt::Debug for GitHubKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubKeySource")
            .field("url_template", &self.config.url_template())
            .field("user_agent", &self.config.user_agent())
            .finish()
    }
}
