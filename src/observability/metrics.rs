//! Metrics collection and exposition.
//!
//! # Metrics
//! - `composer_requests_total` (counter): requests by endpoint, status
//! - `composer_request_duration_seconds` (histogram): latency by endpoint
//!
//! Without an installed recorder every update is a no-op, so the middleware
//! stays in the stack whether or not the exporter runs.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "composer_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "composer_request_duration_seconds";

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    tracing::info!(%addr, "Metrics server listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(endpoint: &str, status: u16, start: Instant) {
    counter!(
        REQUESTS_TOTAL,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(REQUEST_DURATION_SECONDS, "endpoint" => endpoint.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Route-level middleware feeding [`record_request`].
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(request).await;
    record_request(&endpoint, response.status().as_u16(), start);
    response
}
