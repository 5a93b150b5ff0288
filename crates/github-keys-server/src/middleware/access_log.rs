//! Access log and request id middleware.

use std::net::SocketAddr;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::{
    body::{Body, HttpBody},
    extract::ConnectInfo,
    http::{HeaderMap, HeaderName, HeaderValue, Request, Response, header},
};
use tower::{Layer, Service};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Layer that tags each request with an id and logs one access line for it.
#[derive(Clone, Default)]
pub struct AccessLogLayer;

impl<S> Layer<S> for AccessLogLayer {
    type Service = AccessLogMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AccessLogMiddleware { inner }
    }
}

/// Middleware produced by [`AccessLogLayer`].
#[derive(Clone)]
pub struct AccessLogMiddleware<S> {
    inner: S,
}

/// Request fields captured before the request is handed to the inner service.
struct RequestLine {
    method: String,
    uri: String,
    protocol: String,
    host: String,
    remote_addr: String,
    user_agent: String,
}

impl RequestLine {
    fn capture(request: &Request<Body>) -> Self {
        let headers = request.headers();

        let host = header_str(headers, header::HOST)
            .or_else(|| request.uri().authority().map(|a| a.as_str()))
            .unwrap_or("-")
            .to_string();

        // Only present when served with connect info; absent under oneshot tests.
        let remote_addr = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_else(|| "-".to_string());

        Self {
            method: request.method().to_string(),
            uri: request.uri().to_string(),
            protocol: format!("{:?}", request.version()),
            host,
            remote_addr,
            user_agent: header_str(headers, header::USER_AGENT)
                .unwrap_or("-")
                .to_string(),
        }
    }
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Returns the incoming request id, or a fresh UUID v4.
fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

impl<S> Service<Request<Body>> for AccessLogMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        let start = Instant::now();
        let request_id = resolve_request_id(request.headers());
        let line = RequestLine::capture(&request);

        let header_value = HeaderValue::from_str(&request_id).ok();
        if let Some(value) = &header_value {
            request
                .headers_mut()
                .insert(REQUEST_ID_HEADER.clone(), value.clone());
        }

        let span = info_span!(
            "http_request",
            request_id = %request_id,
            method = %line.method,
            path = %request.uri().path(),
        );

        // Take the service that was driven to readiness, leave a clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(
            async move {
                let mut response = inner.call(request).await?;

                if let Some(value) = header_value {
                    response
                        .headers_mut()
                        .insert(REQUEST_ID_HEADER.clone(), value);
                }

                let bytes = response.body().size_hint().exact().unwrap_or(0);

                info!(
                    method = %line.method,
                    status = response.status().as_u16(),
                    bytes,
                    uri = %line.uri,
                    protocol = %line.protocol,
                    host = %line.host,
                    remote_addr = %line.remote_addr,
                    user_agent = %line.user_agent,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "access"
                );

                Ok(response)
            }
            .instrument(span),
        )
    }
}
