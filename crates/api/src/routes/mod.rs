pub mod health;
pub mod misc;
pub mod player;
pub mod token;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth                 authenticate (POST)
/// /users                update progress (PUT)
/// /user/{telegram_id}   read progress (GET)
/// /me                   read progress via bearer session (GET)
///
/// /generate_token       issue temp token (POST)
/// /exchange_token       swap temp token for session token (POST)
///
/// /log                  client log relay (POST)
/// /backup               game-state snapshot (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(player::router())
        .merge(token::router())
        .merge(misc::router())
}
