//! Mapping from registration failures to externally visible outcomes.

use super::errors::RegistrationError;

/// Failure kind, stripped of detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TournamentNotFound,
    InvalidName,
    UpstreamUnavailable,
    MalformedInput,
}

impl ErrorKind {
    /// Label used in logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TournamentNotFound => "tournament_not_found",
            ErrorKind::InvalidName => "invalid_name",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::MalformedInput => "malformed_input",
        }
    }
}

/// How a failure is surfaced to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Referenced resource does not exist
    MissingResource,
    /// Request was understood and refused
    RejectedRequest,
}

impl RegistrationError {
    /// Failure kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrationError::TournamentNotFound => ErrorKind::TournamentNotFound,
            RegistrationError::InvalidName => ErrorKind::InvalidName,
            RegistrationError::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            RegistrationError::MalformedInput(_) => ErrorKind::MalformedInput,
        }
    }

    /// External outcome. Only a missing tournament is a missing resource.
    pub fn outcome(&self) -> Outcome {
        classify(self.kind())
    }

    /// Message safe to return to clients
    pub fn client_message(&self) -> String {
        self.to_string()
    }
}

/// Outcome for a failure kind
pub fn classify(kind: ErrorKind) -> Outcome {
    match kind {
        ErrorKind::TournamentNotFound => Outcome::MissingResource,
        ErrorKind::InvalidName | ErrorKind::UpstreamUnavailable | ErrorKind::MalformedInput => {
            Outcome::RejectedRequest
        }
    }
}
