//! HTTP API for tournament registration.
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health                          - Health check
//! POST /tournaments                     - Create tournament
//! GET  /tournaments                     - List tournaments
//! GET  /tournaments/{id}                - Get tournament
//! POST /tournaments/{id}/players        - Register player
//! GET  /tournaments/{id}/players        - List players of a tournament
//! GET  /players/{id}                    - Get player
//! ```
//!
//! Error responses carry `{"error": "<message>"}`. A missing tournament or
//! player is `404`; every other failure is `400`.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tourney::{RegistrationPipeline, Store, UpstreamClient, UpstreamConfig};
//! use tourney_server::api::{AppState, create_router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let upstream = UpstreamClient::from_config(&UpstreamConfig::default())?;
//! let pipeline = RegistrationPipeline::new(Arc::new(Store::new()), Arc::new(upstream));
//!
//! let app = create_router(AppState::new(pipeline));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively.

pub mod errors;
pub mod players;
pub mod request_id;
pub mod tournaments;

pub use errors::{ApiError, ErrorResponse};

use axum::{Router, extract::State, response::Json, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tourney::RegistrationPipeline;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RegistrationPipeline>,
}

impl AppState {
    pub fn new(pipeline: RegistrationPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Create the API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/tournaments",
            get(tournaments::list_tournaments).post(tournaments::create_tournament),
        )
        .route("/tournaments/{tournament_id}", get(tournaments::get_tournament))
        .route(
            "/tournaments/{tournament_id}/players",
            get(players::list_players).post(players::register_player),
        )
        .route("/players/{player_id}", get(players::get_player))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/health
/// # {"status":"OK","version":"0.1.0","timestamp":"...","tournaments":1,"players":3,"upstream":{...}}
/// ```
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let store = state.pipeline.store();
    Json(json!({
        "status": "OK",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "tournaments": store.tournament_count(),
        "players": store.player_count(),
        "upstream": state.pipeline.upstream().stats(),
    }))
}
