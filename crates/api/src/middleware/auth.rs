//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::Utc;
use gwc_core::error::CoreError;
use gwc_db::models::player::Player;
use gwc_db::repositories::PlayerRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Player resolved from a session token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires an active
/// session:
///
/// ```ignore
/// async fn my_handler(auth: AuthPlayer) -> AppResult<Json<Ack>> {
///     tracing::info!(telegram_id = auth.player.telegram_id, "handling request");
///     Ok(Json(Ack::ok()))
/// }
/// ```
///
/// The session-token lookup filters on `session_token_expiration > now`, so
/// an expired token is rejected identically to an unknown one.
#[derive(Debug, Clone)]
pub struct AuthPlayer {
    /// The full player record the session token resolves to.
    pub player: Player,
}

impl FromRequestParts<AppState> for AuthPlayer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let player = PlayerRepo::find_by_session_token(&state.db, token, Utc::now().timestamp())
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
            })?;

        Ok(AuthPlayer { player })
    }
}
