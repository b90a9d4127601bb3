//! Route definitions for client logging and backups.

use axum::routing::post;
use axum::Router;

use crate::handlers::misc;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// POST /log     -> log
/// POST /backup  -> backup
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/log", post(misc::log))
        .route("/backup", post(misc::backup))
}
