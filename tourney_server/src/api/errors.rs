//! HTTP error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tourney::{Outcome, RegistrationError};

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error returned by API handlers
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 404 with a fixed message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// HTTP status for a classified failure
pub fn status_for(outcome: Outcome) -> StatusCode {
    match outcome {
        Outcome::MissingResource => StatusCode::NOT_FOUND,
        Outcome::RejectedRequest => StatusCode::BAD_REQUEST,
    }
}

impl From<&RegistrationError> for ApiError {
    fn from(err: &RegistrationError) -> Self {
        Self {
            status: status_for(err.outcome()),
            message: err.client_message(),
        }
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        Self::from(&err)
    }
}

/// Unparseable request bodies are malformed input
pub fn malformed_body(rejection: JsonRejection) -> RegistrationError {
    RegistrationError::MalformedInput(rejection.body_text())
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        malformed_body(rejection).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
