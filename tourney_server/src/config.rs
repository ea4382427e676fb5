//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::{net::SocketAddr, time::Duration};
use tourney::upstream::{UpstreamConfig, config::DEFAULT_BASE_URL};

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Catalog client configuration
    pub upstream: UpstreamConfig,
    /// Prometheus exporter address, disabled when `None`
    pub metrics_bind: Option<SocketAddr>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `upstream_override` - Optional catalog base URL override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        upstream_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(bind_override, upstream_override, |key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment
    pub fn from_lookup<F>(
        bind_override: Option<SocketAddr>,
        upstream_override: Option<String>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_var(&lookup, "SERVER_BIND")?.unwrap_or(default_bind()),
        };

        let base_url = upstream_override
            .or_else(|| lookup("UPSTREAM_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let defaults = UpstreamConfig::default();
        let upstream = UpstreamConfig {
            base_url,
            max_concurrent: parse_var(&lookup, "UPSTREAM_MAX_CONCURRENT")?
                .unwrap_or(defaults.max_concurrent),
            request_timeout: parse_var::<u64, _>(&lookup, "UPSTREAM_TIMEOUT_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            cache_capacity: parse_var(&lookup, "UPSTREAM_CACHE_CAPACITY")?,
        };

        let metrics_bind = parse_var(&lookup, "METRICS_BIND")?;

        Ok(ServerConfig {
            bind,
            upstream,
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.max_concurrent == 0 {
            return Err(ConfigError::Invalid {
                var: "UPSTREAM_MAX_CONCURRENT".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.upstream.request_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                var: "UPSTREAM_TIMEOUT_MS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.upstream.cache_capacity == Some(0) {
            return Err(ConfigError::Invalid {
                var: "UPSTREAM_CACHE_CAPACITY".to_string(),
                reason: "Must be greater than 0 (unset it for an unbounded cache)".to_string(),
            });
        }

        let base_url = &self.upstream.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "UPSTREAM_BASE_URL".to_string(),
                reason: format!("Must be an http(s) URL, got '{base_url}'"),
            });
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from the server bind address ({})", self.bind),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

/// Parse an optional variable, failing if it is set but invalid
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map(Some).map_err(|e: T::Err| ConfigError::Invalid {
            var: key.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(None),
    }
}
