//! Catalog client configuration.

use super::timeouts::DEFAULT_REQUEST_TIMEOUT;
use std::time::Duration;

/// Public Pokémon catalog
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Default cap on in-flight catalog calls
pub const DEFAULT_MAX_CONCURRENT: usize = 10;

/// Catalog client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL; the lookup key is appended as the last path segment
    pub base_url: String,
    /// Maximum concurrent outbound calls
    pub max_concurrent: usize,
    /// Timeout for one outbound call
    pub request_timeout: Duration,
    /// Cache capacity, `None` for unbounded
    pub cache_capacity: Option<usize>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            cache_capacity: None,
        }
    }
}

impl UpstreamConfig {
    /// Configuration pointing at a different catalog, other settings default
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
