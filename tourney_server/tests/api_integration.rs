//! Integration tests for the HTTP API.
//!
//! The router is driven with `oneshot`; player names are resolved by the real
//! reqwest-backed catalog client against a fake catalog served locally.

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode, header::HeaderMap},
    response::{IntoResponse, Response},
    routing::get,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use tourney::{RegistrationPipeline, Store, UpstreamClient, UpstreamConfig};
use tourney_server::api::{AppState, create_router};
use tower::ServiceExt; // For `oneshot` method

// ============================================================================
// Fake catalog
// ============================================================================

async fn fake_pokemon(State(hits): State<Arc<AtomicUsize>>, Path(name): Path<String>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    match name.as_str() {
        "pikachu" => Json(json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "" } }]
        }))
        .into_response(),
        "charizard" => Json(json!({
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "types": [
                { "slot": 2, "type": { "name": "flying", "url": "" } },
                { "slot": 1, "type": { "name": "fire", "url": "" } }
            ]
        }))
        .into_response(),
        "crash" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "garbled" => (StatusCode::OK, "not json").into_response(),
        "sleepy" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::NOT_FOUND.into_response()
        }
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// Serve the fake catalog on an ephemeral port
async fn spawn_fake_catalog() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/v2/pokemon/{name}", get(fake_pokemon))
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api/v2/pokemon"), hits)
}

/// Helper to create test server backed by the fake catalog
async fn create_test_server() -> (Router, Arc<AtomicUsize>) {
    let (base_url, hits) = spawn_fake_catalog().await;
    let config = UpstreamConfig {
        request_timeout: Duration::from_millis(500),
        ..UpstreamConfig::with_base_url(base_url)
    };

    let upstream = UpstreamClient::from_config(&config).unwrap();
    let pipeline = RegistrationPipeline::new(Arc::new(Store::new()), Arc::new(upstream));

    (create_router(AppState::new(pipeline)), hits)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, headers, json)
}

async fn create_tournament(app: &Router, name: &str) -> String {
    let (status, _, body) = send(app, "POST", "/tournaments", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn register(app: &Router, tournament_id: &str, name: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(
        app,
        "POST",
        &format!("/tournaments/{tournament_id}/players"),
        Some(json!({ "name": name })),
    )
    .await;
    (status, body)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_endpoint() {
    let (app, _) = create_test_server().await;
    create_tournament(&app, "Championship").await;

    let (status, _, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["tournaments"], 1);
    assert_eq!(body["players"], 0);
    assert_eq!(body["upstream"]["maxConcurrent"], 10);
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let (app, _) = create_test_server().await;

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");

    let (_, headers, _) = send(&app, "GET", "/tournaments/nope", None).await;
    let generated = headers["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

// ============================================================================
// Tournament Tests
// ============================================================================

#[tokio::test]
async fn test_create_tournament() {
    let (app, _) = create_test_server().await;

    let (status, _, body) = send(
        &app,
        "POST",
        "/tournaments",
        Some(json!({ "name": "Championship" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Championship");
    assert!(body["id"].is_string());
    assert!(chrono::DateTime::parse_from_rfc3339(body["createdAt"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_create_tournament_with_empty_name() {
    let (app, _) = create_test_server().await;

    let (status, _, body) = send(&app, "POST", "/tournaments", Some(json!({ "name": "" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "");
}

#[tokio::test]
async fn test_create_tournament_malformed_body() {
    let (app, _) = create_test_server().await;

    for body in [json!({ "invalidField": "value" }), json!({ "name": 42 })] {
        let (status, _, response) = send(&app, "POST", "/tournaments", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response["error"].as_str().unwrap().starts_with("Invalid request"));
    }

    let (status, _, _) = send(&app, "POST", "/tournaments", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, _, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(health["tournaments"], 0);
}

#[tokio::test]
async fn test_get_and_list_tournaments() {
    let (app, _) = create_test_server().await;
    let first = create_tournament(&app, "First").await;
    let second = create_tournament(&app, "Second").await;

    let (status, _, body) = send(&app, "GET", &format!("/tournaments/{first}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "First");

    let (status, _, body) = send(&app, "GET", "/tournaments", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
}

#[tokio::test]
async fn test_get_missing_tournament() {
    let (app, _) = create_test_server().await;

    let (status, _, body) =
        send(&app, "GET", "/tournaments/non-existent-tournament-id", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Tournament not found" }));
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_valid_player() {
    let (app, _) = create_test_server().await;
    let tournament_id = create_tournament(&app, "Championship").await;

    let (status, body) = register(&app, &tournament_id, "pikachu").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "pikachu");
    assert_eq!(body["tournamentId"], tournament_id.as_str());
    assert!(body["id"].is_string());

    let (status, _, players) =
        send(&app, "GET", &format!("/tournaments/{tournament_id}/players"), None).await;
    assert_eq!(status, StatusCode::OK);
    let players = players.as_array().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["attributes"]["externalId"], 25);
    assert_eq!(players[0]["attributes"]["types"], json!(["electric"]));
    assert_eq!(players[0]["attributes"]["height"], 4);
    assert_eq!(players[0]["attributes"]["weight"], 60);
}

#[tokio::test]
async fn test_register_keeps_submitted_casing() {
    let (app, _) = create_test_server().await;
    let tournament_id = create_tournament(&app, "Case").await;

    let (status, body) = register(&app, &tournament_id, "PIKACHU").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "PIKACHU");
}

#[tokio::test]
async fn test_register_multi_type_player() {
    let (app, _) = create_test_server().await;
    let tournament_id = create_tournament(&app, "Types").await;

    let (status, body) = register(&app, &tournament_id, "charizard").await;
    assert_eq!(status, StatusCode::CREATED);

    let player_id = body["id"].as_str().unwrap();
    let (status, _, player) = send(&app, "GET", &format!("/players/{player_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(player["attributes"]["externalId"], 6);
    assert_eq!(player["attributes"]["types"], json!(["fire", "flying"]));
}

#[tokio::test]
async fn test_register_invalid_name() {
    let (app, _) = create_test_server().await;
    let tournament_id = create_tournament(&app, "Championship").await;

    for name in ["not-a-real-pokemon", "Ash Ketchum"] {
        let (status, body) = register(&app, &tournament_id, name).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Name is not a valid Pokemon" }));
    }

    let (_, _, players) =
        send(&app, "GET", &format!("/tournaments/{tournament_id}/players"), None).await;
    assert_eq!(players, json!([]));
}

#[tokio::test]
async fn test_register_into_missing_tournament() {
    let (app, hits) = create_test_server().await;

    let (status, body) = register(&app, "non-existent-tournament-id", "pikachu").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Tournament not found" }));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_register_malformed_body() {
    let (app, hits) = create_test_server().await;
    let tournament_id = create_tournament(&app, "Championship").await;

    for body in [json!({}), json!({ "name": "" }), json!({ "name": ["pikachu"] })] {
        let (status, _, response) = send(
            &app,
            "POST",
            &format!("/tournaments/{tournament_id}/players"),
            Some(body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response["error"].as_str().unwrap().starts_with("Invalid request"));
    }

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_catalog_failures_are_unavailable_not_invalid() {
    let (app, _) = create_test_server().await;
    let tournament_id = create_tournament(&app, "Outage").await;

    for name in ["crash", "garbled", "sleepy"] {
        let (status, body) = register(&app, &tournament_id, name).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{name}");
        assert_eq!(body, json!({ "error": "Pokemon catalog is unavailable" }), "{name}");
    }

    let (_, _, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(health["players"], 0);
    assert_eq!(health["upstream"]["inFlight"], 0);
}

#[tokio::test]
async fn test_same_name_is_fetched_once() {
    let (app, hits) = create_test_server().await;
    let tournament_id = create_tournament(&app, "Cache").await;

    for name in ["pikachu", "Pikachu", "pikachu"] {
        let (status, _) = register(&app, &tournament_id, name).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_lookups_are_not_cached() {
    let (app, hits) = create_test_server().await;
    let tournament_id = create_tournament(&app, "Retry").await;

    register(&app, &tournament_id, "crash").await;
    register(&app, &tournament_id, "crash").await;

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

// ============================================================================
// Player Tests
// ============================================================================

#[tokio::test]
async fn test_get_missing_player() {
    let (app, _) = create_test_server().await;

    let (status, _, body) = send(&app, "GET", "/players/unknown", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Player not found" }));
}

#[tokio::test]
async fn test_list_players_of_missing_tournament() {
    let (app, _) = create_test_server().await;

    let (status, _, body) = send(&app, "GET", "/tournaments/unknown/players", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Tournament not found" }));
}
