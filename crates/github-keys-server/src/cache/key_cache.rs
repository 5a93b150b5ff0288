//! Time-bounded key cache.

use std::sync::Arc;
use std::time::Instant;

use github_keys_source::{KeySource, KeySourceError};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::cache::clock::{Clock, SystemClock};
use crate::cache::snapshot::KeySnapshot;
use crate::metrics::CacheMetrics;

/// Error del sistema de cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// No snapshot has ever been fetched and the latest attempt failed.
    #[error("no keys available: {0}")]
    Unavailable(#[source] KeySourceError),
}

/// Configuracion del cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL en segundos (default: 86400 = un dia)
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_seconds: 86_400 }
    }
}

/// Cache of one account's keys with lazy, expiry-driven refresh.
///
/// The whole check-fetch-replace sequence runs under a single async mutex,
/// held across the upstream call. Keys and expiry are therefore always
/// replaced together, and callers queued behind a refresh see its result
/// instead of fetching again.
///
/// A failed refresh never discards a snapshot: the expired one keeps being
/// served and its expiry is left untouched, so the next access retries.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use github_keys_server::cache::{CacheConfig, KeyCache};
/// use github_keys_source::{GitHubKeySource, KeySourceConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let source = GitHubKeySource::new(KeySourceConfig::default())?;
/// let cache = KeyCache::new("octocat", Arc::new(source), CacheConfig::default());
///
/// let snapshot = cache.get_current().await?;
/// print!("{}", snapshot.render());
/// # Ok(())
/// # }
/// ```
pub struct KeyCache {
    identity: String,
    source: Arc<dyn KeySource>,
    clock: Arc<dyn Clock>,
    ttl_seconds: u64,
    current: Mutex<Option<Arc<KeySnapshot>>>,
    metrics: CacheMetrics,
}

impl KeyCache {
    /// Crea un nuevo cache usando el reloj del sistema.
    pub fn new(identity: impl Into<String>, source: Arc<dyn KeySource>, config: CacheConfig) -> Self {
        Self::with_clock(identity, source, config, Arc::new(SystemClock))
    }

    /// Crea un nuevo cache con un reloj dado.
    pub fn with_clock(
        identity: impl Into<String>,
        source: Arc<dyn KeySource>,
        config: CacheConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            identity: identity.into(),
            source,
            clock,
            ttl_seconds: config.ttl_seconds,
            current: Mutex::new(None),
            metrics: CacheMetrics::new(),
        }
    }

    /// Returns the account whose keys are cached.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Returns the TTL in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Returns the live snapshot, refreshing it first if it has expired.
    ///
    /// # Errors
    ///
    /// `CacheError::Unavailable` only when no fetch has ever succeeded.
    pub async fn get_current(&self) -> Result<Arc<KeySnapshot>, CacheError> {
        let mut current = self.current.lock().await;
        let now = self.clock.now();

        if let Some(snapshot) = current.as_ref()
            && !snapshot.is_expired(now)
        {
            self.metrics.record_hit();
            return Ok(Arc::clone(snapshot));
        }

        let start = Instant::now();
        match self.source.fetch(&self.identity).await {
            Ok(keys) => {
                self.metrics.record_fetch("success", start.elapsed());

                let snapshot = Arc::new(KeySnapshot::new(keys, self.clock.now(), self.ttl_seconds));
                self.metrics.update_key_count(snapshot.len());

                info!(
                    identity = %self.identity,
                    source = self.source.name(),
                    keys = snapshot.len(),
                    expires_at = snapshot.expires_at(),
                    "Key snapshot refreshed"
                );

                *current = Some(Arc::clone(&snapshot));
                Ok(snapshot)
            },
            Err(err) => {
                self.metrics.record_fetch(err.kind(), start.elapsed());

                match current.as_ref() {
                    Some(stale) => {
                        self.metrics.record_stale_serve();
                        warn!(
                            identity = %self.identity,
                            error = %err,
                            expired_at = stale.expires_at(),
                            "Key refresh failed, serving stale snapshot"
                        );
                        Ok(Arc::clone(stale))
                    },
                    None => {
                        error!(
                            identity = %self.identity,
                            error = %err,
                            "Key fetch failed and no snapshot is available"
                        );
                        Err(CacheError::Unavailable(err))
                    },
                }
            },
        }
    }

    /// Performs the startup fetch and returns the number of keys obtained.
    ///
    /// Goes through the same path as [`KeyCache::get_current`]; a failure
    /// here means the server has nothing to serve.
    pub async fn prime(&self) -> Result<usize, CacheError> {
        self.get_current().await.map(|snapshot| snapshot.len())
    }

    /// Returns the live snapshot without triggering a refresh.
    pub async fn peek(&self) -> Option<Arc<KeySnapshot>> {
        self.current.lock().await.clone()
    }
}

impl std::fmt::Debug for KeyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyCache")
            .field("identity", &self.identity)
            .field("source", &self.source.name())
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
