//! Timeout wrappers for outbound catalog calls.
//!
//! A catalog call that never completes must not hold a limiter slot forever.

use super::errors::FetchError;
use std::time::Duration;
use tokio::time::timeout;

/// Default timeout for a single catalog lookup (10 seconds)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for timed catalog calls
#[derive(Debug, thiserror::Error)]
pub enum TimeoutError {
    /// Call did not finish in time
    #[error("Catalog request timed out after {0:?}")]
    Timeout(Duration),

    /// Call finished with a fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Result type for timed catalog calls
pub type TimeoutResult<T> = Result<T, TimeoutError>;

/// Run a catalog call with a timeout
///
/// # Arguments
///
/// * `duration` - Timeout duration
/// * `future` - Catalog call to execute
///
/// # Returns
///
/// * `TimeoutResult<T>` - Result, fetch error or timeout error
pub async fn with_timeout<F, T>(duration: Duration, future: F) -> TimeoutResult<T>
where
    F: std::future::Future<Output = Result<T, FetchError>>,
{
    match timeout(duration, future).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(e)) => Err(TimeoutError::Fetch(e)),
        Err(_) => Err(TimeoutError::Timeout(duration)),
    }
}
