//! HTTP-level integration tests for the game API.
//!
//! These cover request validation, the uniform response envelope, the bearer
//! session guard, and general middleware behaviour. All of them resolve
//! before the first storage operation, so no MongoDB server is needed.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, get_auth, post_json, put_json};
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// General HTTP behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app().await;
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app().await;
    let response = post_json(app, "/api/log", json!({ "message": "ping" })).await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = common::build_test_app().await;

    // CORS preflight requires custom headers, so we build the request manually.
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/auth")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");
}

// ---------------------------------------------------------------------------
// Request validation and error envelope
// ---------------------------------------------------------------------------

/// `POST /api/auth` without a Telegram ID is rejected with a named 400 error.
#[tokio::test]
async fn auth_without_telegram_id_returns_400() {
    let app = common::build_test_app().await;
    let response = post_json(app, "/api/auth", json!({ "username": "ann" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No Telegram ID provided");
}

/// `PUT /api/users` without `totalClicks` is rejected before any storage
/// mutation happens (the lazy client would fail loudly otherwise).
#[tokio::test]
async fn update_without_total_clicks_returns_400() {
    let app = common::build_test_app().await;
    let response = put_json(app, "/api/users", json!({ "telegram_id": 42 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No totalClicks provided");
}

#[tokio::test]
async fn update_without_telegram_id_returns_400() {
    let app = common::build_test_app().await;
    let response = put_json(app, "/api/users", json!({ "totalClicks": 17 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No Telegram ID provided");
}

/// The counter is client-authoritative but still has to be a sane integer.
#[tokio::test]
async fn update_with_negative_total_clicks_returns_400() {
    let app = common::build_test_app().await;
    let response = put_json(
        app,
        "/api/users",
        json!({ "telegram_id": 42, "totalClicks": -1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "totalClicks must be non-negative");
}

#[tokio::test]
async fn generate_token_without_telegram_id_returns_400() {
    let app = common::build_test_app().await;
    let response = post_json(app, "/api/generate_token", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No Telegram ID provided");
}

#[tokio::test]
async fn exchange_without_token_returns_400() {
    let app = common::build_test_app().await;
    let response = post_json(app, "/api/exchange_token", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No token provided");
}

// ---------------------------------------------------------------------------
// Client log relay
// ---------------------------------------------------------------------------

/// `POST /api/log` succeeds without touching storage.
#[tokio::test]
async fn log_returns_success_envelope() {
    let app = common::build_test_app().await;
    let response = post_json(app, "/api/log", json!({ "message": "boot ok" })).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn log_without_message_returns_400() {
    let app = common::build_test_app().await;
    let response = post_json(app, "/api/log", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No message provided");
}

// ---------------------------------------------------------------------------
// Bearer session guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn me_without_authorization_returns_401() {
    let app = common::build_test_app().await;
    let response = get(app, "/api/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing Authorization header");
}

/// A non-Bearer scheme is rejected before any token lookup.
#[tokio::test]
async fn me_with_malformed_authorization_returns_401() {
    let app = common::build_test_app().await;
    let response = get_auth(app, "/api/me", "Basic dXNlcjpwdw==").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Invalid Authorization format. Expected: Bearer <token>"
    );
}
