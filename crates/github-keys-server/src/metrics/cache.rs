//! Cache metrics recording.

use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Registra las metricas de cache.
/// Llamar una vez al inicio para registrar las metricas.
pub fn register_cache_metrics() {
    metrics::describe_counter!(
        "github_keys_cache_hits_total",
        "Accesses served from a snapshot that had not expired"
    );
    metrics::describe_counter!(
        "github_keys_upstream_fetches_total",
        "Upstream key fetches by outcome"
    );
    metrics::describe_counter!(
        "github_keys_stale_serves_total",
        "Accesses served from an expired snapshot after a failed refresh"
    );
    metrics::describe_gauge!("github_keys_cached_keys", "Number of keys in the live snapshot");
    metrics::describe_histogram!(
        "github_keys_upstream_fetch_seconds",
        "Time spent fetching keys upstream"
    );
}

/// Recorder de metricas de cache.
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics;

impl CacheMetrics {
    pub fn new() -> Self {
        Self
    }

    /// Registra un acceso servido desde un snapshot vigente
    pub fn record_hit(&self) {
        counter!("github_keys_cache_hits_total").increment(1);
    }

    /// Registra un fetch upstream con su resultado ("success", "network", "format")
    pub fn record_fetch(&self, outcome: &'static str, duration: Duration) {
        counter!("github_keys_upstream_fetches_total", "outcome" => outcome).increment(1);
        histogram!("github_keys_upstream_fetch_seconds", "outcome" => outcome)
            .record(duration.as_secs_f64());
    }

    /// Registra un snapshot expirado servido tras un fallo
    pub fn record_stale_serve(&self) {
        counter!("github_keys_stale_serves_total").increment(1);
    }

    /// Actualiza el gauge de keys
    pub fn update_key_count(&self, count: usize) {
        gauge!("github_keys_cached_keys").set(count as f64);
    }
}
