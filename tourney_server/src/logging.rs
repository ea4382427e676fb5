//! Structured logging configuration.
//!
//! Installs a `tracing` subscriber filtered by `RUST_LOG`. Records emitted by
//! the `tourney` library through the `log` facade are routed into the same
//! subscriber.

use std::time::Duration;
use tourney::{ErrorKind, RegistrationError};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn";

/// Initialize structured logging
///
/// # Example
///
/// ```no_run
/// use tourney_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log the result of a registration attempt
///
/// Failures carry their kind and, when present, the internal detail that is
/// withheld from the client.
///
/// # Example
///
/// ```
/// use tourney::RegistrationError;
/// use tourney_server::logging::log_registration_outcome;
///
/// log_registration_outcome(
///     "req-1",
///     "not-a-tournament",
///     Err(&RegistrationError::TournamentNotFound),
/// );
/// ```
pub fn log_registration_outcome(
    request_id: &str,
    tournament_id: &str,
    outcome: Result<&str, &RegistrationError>,
) {
    match outcome {
        Ok(player_id) => tracing::info!(
            request_id = request_id,
            tournament_id = tournament_id,
            player_id = player_id,
            "Player registered"
        ),
        Err(err) => match err.kind() {
            ErrorKind::UpstreamUnavailable => tracing::warn!(
                request_id = request_id,
                tournament_id = tournament_id,
                kind = err.kind().as_str(),
                detail = err.detail(),
                "Registration failed: catalog unavailable"
            ),
            kind => tracing::info!(
                request_id = request_id,
                tournament_id = tournament_id,
                kind = kind.as_str(),
                detail = err.detail(),
                "Registration rejected"
            ),
        },
    }
}

/// Log API request/response
///
/// Requests slower than one second are logged at warn level.
pub fn log_api_request(request_id: &str, method: &str, path: &str, status: u16, elapsed: Duration) {
    let duration_ms = elapsed.as_millis() as u64;
    if duration_ms > 1000 {
        tracing::warn!(
            request_id = request_id,
            http_method = method,
            http_path = path,
            http_status = status,
            duration_ms = duration_ms,
            "Slow API request"
        );
    } else {
        tracing::info!(
            request_id = request_id,
            http_method = method,
            http_path = path,
            http_status = status,
            duration_ms = duration_ms,
            "API request completed"
        );
    }
}
