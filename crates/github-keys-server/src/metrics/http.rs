//! HTTP metrics middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};
use std::time::Instant;

/// Middleware que registra metricas HTTP para cada request.
///
/// Every path reaches the same handler, so requests are labelled by method
/// and status only.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    let duration = start.elapsed();

    // Registrar metricas
    counter!(
        "github_keys_http_requests_total",
        "method" => method.clone(),
        "status" => status
    )
    .increment(1);

    histogram!(
        "github_keys_http_request_duration_seconds",
        "method" => method
    )
    .record(duration.as_secs_f64());

    response
}

/// Registra las metricas HTTP
pub fn register_http_metrics() {
    metrics::describe_counter!(
        "github_keys_http_requests_total",
        "Total number of HTTP requests"
    );
    metrics::describe_histogram!(
        "github_keys_http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
}
