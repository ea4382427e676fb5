//! HTTP server for tournament player registration.
//!
//! - [`api`]: Router, handlers and request-id middleware
//! - [`config`]: Environment-driven configuration
//! - [`logging`]: `tracing` subscriber setup and structured log helpers
//! - [`metrics`]: Prometheus counters and gauges

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
