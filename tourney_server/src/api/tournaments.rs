//! Tournament API handlers.
//!
//! # Examples
//!
//! Create a tournament:
//! ```bash
//! curl -X POST http://localhost:3000/tournaments \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Championship"}'
//! ```

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use tourney::Tournament;

use super::{AppState, errors::ApiError};
use crate::metrics;

#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: String,
}

/// Create a tournament.
///
/// Any string is accepted as a name, including the empty string.
///
/// # Response
///
/// Returns `201 Created`:
/// ```json
/// { "id": "6f1c...", "name": "Championship", "createdAt": "2025-01-01T12:00:00Z" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Body is not JSON or has no string `name`
pub async fn create_tournament(
    State(state): State<AppState>,
    payload: Result<Json<CreateTournamentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Tournament>), ApiError> {
    let Json(request) = payload?;

    let tournament = state.pipeline.create_tournament(request.name);
    metrics::tournaments_created_total();

    Ok((StatusCode::CREATED, Json(tournament)))
}

/// List all tournaments in creation order.
pub async fn list_tournaments(State(state): State<AppState>) -> Json<Vec<Tournament>> {
    Json(state.pipeline.list_tournaments())
}

/// Get a single tournament.
///
/// # Errors
///
/// - `404 Not Found`: No tournament with this ID
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
) -> Result<Json<Tournament>, ApiError> {
    state
        .pipeline
        .get_tournament(&tournament_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Tournament not found"))
}
