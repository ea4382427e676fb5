//! Store error types.

use super::models::TournamentId;
use thiserror::Error;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Referenced tournament does not exist
    #[error("Tournament not found: {0}")]
    TournamentNotFound(TournamentId),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
