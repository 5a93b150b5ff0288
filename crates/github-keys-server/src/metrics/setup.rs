//! Metrics setup and initialization.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use tracing::info;

use super::cache::register_cache_metrics;
use super::http::register_http_metrics;

/// Inicializa el sistema de metricas con un listener Prometheus propio.
///
/// The exporter gets its own address so the key endpoint keeps answering
/// every path. Must be called from within a Tokio runtime.
pub fn init_metrics(listen: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(listen)
        // Buckets en segundos: de 1 ms a 10 s, los fetch upstream dominan
        .set_buckets(&[
            0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ])?
        .install()?;

    register_cache_metrics();
    register_http_metrics();

    info!(%listen, "Metrics exporter listening");
    Ok(())
}
