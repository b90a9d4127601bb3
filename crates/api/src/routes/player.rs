//! Route definitions for player authentication and progress.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::player;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// POST /auth                 -> authenticate
/// PUT  /users                -> update
/// GET  /user/{telegram_id}   -> get_player
/// GET  /me                   -> me (requires bearer session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth", post(player::authenticate))
        .route("/users", put(player::update))
        .route("/user/{telegram_id}", get(player::get_player))
        .route("/me", get(player::me))
}
