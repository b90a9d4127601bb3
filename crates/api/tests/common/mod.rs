//! Shared helpers for HTTP-level integration tests.
//!
//! The MongoDB client is lazy: it performs no I/O until the first storage
//! operation. Every test in this suite exercises a path that fails (or
//! succeeds) before reaching storage, so the suite runs without a live
//! database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tower::ServiceExt;

use gwc_api::config::{ServerConfig, SessionConfig};
use gwc_api::router::build_app_router;
use gwc_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        mongodb_uri: "mongodb://127.0.0.1:27017".to_string(),
        mongodb_db: "gwc_test".to_string(),
        session: SessionConfig {
            temp_token_expiry_mins: 10,
            session_token_expiry_days: 7,
        },
    }
}

/// Build a lazy database handle; no connection is made until first use.
pub async fn test_db() -> Database {
    let options = ClientOptions::parse("mongodb://127.0.0.1:27017")
        .await
        .expect("test URI must parse");
    let client = Client::with_options(options).expect("client must build");
    client.database("gwc_test")
}

/// Build the full application router with all middleware layers.
///
/// This uses the same [`build_app_router`] as `main.rs`, so integration
/// tests exercise the exact middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub async fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        db: test_db().await,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with an `Authorization` header.
pub async fn get_auth(app: Router, uri: &str, auth_header: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", auth_header)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON request with the given method.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, body).await
}

/// Read a response body to completion and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be valid JSON")
}
