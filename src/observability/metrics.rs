//! Metrics collection and exposition.
//!
//! # Metrics
//! - `matrix_requests_total` (counter): requests by route and outcome
//! - `matrix_request_duration_seconds` (histogram): handler latency by route
//!
//! # Design Decisions
//! - Prometheus exporter is opt-in via config
//! - Labels are static strings (route name, outcome) to bound cardinality

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(route: &'static str, outcome: &'static str, start: Instant) {
    metrics::counter!("matrix_requests_total", "route" => route, "outcome" => outcome).increment(1);
    metrics::histogram!("matrix_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}
