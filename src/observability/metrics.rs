//! Operational metrics exposition.
//!
//! # Metrics
//! - `chirpy_requests_total` (counter): requests by method, path, status
//! - `chirpy_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Prometheus scrapes hit a separate listener, away from API traffic
//! - The domain hit counter is not exported here; it backs /admin/metrics
//!   and has its own reset semantics

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure to install is logged and otherwise ignored: the API keeps
/// serving without an exporter.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!("chirpy_requests_total", "Total HTTP requests handled");
            describe_histogram!(
                "chirpy_request_duration_seconds",
                "HTTP request latency in seconds"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one handled request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    counter!(
        "chirpy_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "chirpy_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
