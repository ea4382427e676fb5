//! Registration error types.

use crate::{store::StoreError, upstream::UpstreamError};
use thiserror::Error;

/// Registration errors
///
/// Display strings are the stable, client-facing messages; the wrapped detail
/// is kept for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Referenced tournament does not exist
    #[error("Tournament not found")]
    TournamentNotFound,

    /// Catalog does not recognise the name
    #[error("Name is not a valid Pokemon")]
    InvalidName,

    /// Catalog could not be reached or answered unexpectedly
    #[error("Pokemon catalog is unavailable")]
    UpstreamUnavailable(String),

    /// Request failed shape validation
    #[error("Invalid request: {0}")]
    MalformedInput(String),
}

impl RegistrationError {
    /// Internal detail for logging; never sent to clients
    pub fn detail(&self) -> Option<&str> {
        match self {
            RegistrationError::UpstreamUnavailable(detail) => Some(detail),
            RegistrationError::MalformedInput(detail) => Some(detail),
            _ => None,
        }
    }
}

impl From<StoreError> for RegistrationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TournamentNotFound(_) => RegistrationError::TournamentNotFound,
        }
    }
}

impl From<UpstreamError> for RegistrationError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::InvalidName(_) => RegistrationError::InvalidName,
            UpstreamError::Unavailable(detail) => RegistrationError::UpstreamUnavailable(detail),
        }
    }
}

/// Result type for registration operations
pub type RegistrationResult<T> = Result<T, RegistrationError>;
