//! Route definitions for the session-token scheme.

use axum::routing::post;
use axum::Router;

use crate::handlers::token;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// POST /generate_token  -> generate_token
/// POST /exchange_token  -> exchange_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate_token", post(token::generate_token))
        .route("/exchange_token", post(token::exchange_token))
}
