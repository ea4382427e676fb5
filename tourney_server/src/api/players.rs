//! Player API handlers.
//!
//! Registering a player validates the name against the catalog before it is
//! stored:
//! ```bash
//! curl -X POST http://localhost:3000/tournaments/<id>/players \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "pikachu"}'
//! ```

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tourney::{Player, PlayerId, TournamentId};

use super::{
    AppState,
    errors::{ApiError, malformed_body},
    request_id::RequestId,
};
use crate::{logging, metrics};

#[derive(Debug, Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
}

/// Summary returned after a successful registration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: PlayerId,
    pub name: String,
    pub tournament_id: TournamentId,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            tournament_id: player.tournament_id,
        }
    }
}

/// Register a player into a tournament.
///
/// # Response
///
/// Returns `201 Created`:
/// ```json
/// { "id": "0b9e...", "name": "pikachu", "tournamentId": "6f1c..." }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Tournament doesn't exist
/// - `400 Bad Request`: Malformed body, name unknown to the catalog, or
///   catalog unavailable
pub async fn register_player(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(tournament_id): Path<String>,
    payload: Result<Json<RegisterPlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let result = match payload {
        Ok(Json(request)) => {
            state
                .pipeline
                .register_player(&request.name, &tournament_id)
                .await
        }
        Err(rejection) => Err(malformed_body(rejection)),
    };

    metrics::upstream_stats(&state.pipeline.upstream().stats());

    match result {
        Ok(player) => {
            logging::log_registration_outcome(
                request_id.as_str(),
                &tournament_id,
                Ok(&player.id.to_string()),
            );
            metrics::registrations_total("registered");
            Ok((StatusCode::CREATED, Json(player.into())))
        }
        Err(err) => {
            logging::log_registration_outcome(request_id.as_str(), &tournament_id, Err(&err));
            metrics::registrations_total(err.kind().as_str());
            Err(err.into())
        }
    }
}

/// List the players of a tournament with their catalog attributes.
///
/// # Errors
///
/// - `404 Not Found`: Tournament doesn't exist
pub async fn list_players(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
) -> Result<Json<Vec<Player>>, ApiError> {
    Ok(Json(state.pipeline.list_players(&tournament_id)?))
}

/// Get a single player with attributes.
///
/// # Errors
///
/// - `404 Not Found`: No player with this ID
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    state
        .pipeline
        .get_player(&player_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Player not found"))
}
