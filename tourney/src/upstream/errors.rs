//! Upstream error types.

use thiserror::Error;

/// Result type for upstream lookups
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Failure reported by a [`CatalogFetcher`](super::fetcher::CatalogFetcher)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Catalog has no entry for the name
    #[error("No catalog entry for '{0}'")]
    NotFound(String),

    /// Catalog answered with an unexpected status
    #[error("Unexpected catalog status {0}")]
    Status(u16),

    /// Request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded into a record
    #[error("Malformed catalog payload: {0}")]
    Malformed(String),
}

/// Classified outcome of a failed lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Name is categorically rejected by the catalog; retrying will not help
    #[error("Name is not a valid Pokemon: {0}")]
    InvalidName(String),

    /// Catalog is unhealthy or the call failed transiently
    #[error("Pokemon catalog unavailable: {0}")]
    Unavailable(String),
}

impl UpstreamError {
    /// Whether a caller may retry the same lookup later
    pub fn is_transient(&self) -> bool {
        matches!(self, UpstreamError::Unavailable(_))
    }
}

impl From<FetchError> for UpstreamError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound(name) => UpstreamError::InvalidName(name),
            other => UpstreamError::Unavailable(other.to_string()),
        }
    }
}
