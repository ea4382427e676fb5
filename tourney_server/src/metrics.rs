//! Prometheus metrics for the registration service.
//!
//! Metrics are recorded through the `metrics` facade. They are only exported
//! when [`init_metrics`] installs the Prometheus recorder; otherwise every
//! call here is a no-op.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use tourney_server::metrics;
//! use std::net::SocketAddr;
//!
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! metrics::http_requests_total("POST", 201);
//! metrics::registrations_total("invalid_name");
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tourney::upstream::UpstreamStats;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Increment the HTTP request counter.
///
/// Paths are left out of the labels since they embed identifiers.
pub fn http_requests_total(method: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Registration Metrics
// ============================================================================

/// Increment tournaments created counter.
pub fn tournaments_created_total() {
    metrics::counter!("tournaments_created_total").increment(1);
}

/// Increment the registration counter.
///
/// `outcome` is `"registered"` or an error kind label.
pub fn registrations_total(outcome: &'static str) {
    metrics::counter!("registrations_total", "outcome" => outcome).increment(1);
}

// ============================================================================
// Catalog Metrics
// ============================================================================

/// Publish catalog client gauges from a stats snapshot.
pub fn upstream_stats(stats: &UpstreamStats) {
    metrics::gauge!("upstream_cache_entries").set(stats.cached_names as f64);
    metrics::gauge!("upstream_outbound_calls").set(stats.outbound_calls as f64);
    metrics::gauge!("upstream_cache_hits").set(stats.cache_hits as f64);
}
