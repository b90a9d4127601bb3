//! Handlers for the temp-token / session-token exchange scheme.
//!
//! A short-lived temp token is suited to being embedded in a deep link; the
//! client exchanges it once for a longer-lived bearer credential, so
//! long-lived secrets never appear in URLs.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use gwc_core::error::CoreError;
use gwc_core::token;
use gwc_core::types::PlayerId;
use gwc_db::repositories::PlayerRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/generate_token`.
#[derive(Debug, Deserialize)]
pub struct GenerateTokenRequest {
    pub telegram_id: Option<PlayerId>,
    pub username: Option<String>,
}

/// Request body for `POST /api/exchange_token`.
#[derive(Debug, Deserialize)]
pub struct ExchangeTokenRequest {
    pub token: Option<String>,
}

/// Response for `POST /api/generate_token`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    /// The temp token to embed in the web-app launch link.
    pub token: String,
}

/// Response for `POST /api/exchange_token`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    /// Bearer credential for subsequent authenticated requests.
    pub session_token: String,
    /// Session token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/generate_token
///
/// Ensure the player record exists (creating it with default sub-state if
/// not) and issue a fresh temp token.
pub async fn generate_token(
    State(state): State<AppState>,
    Json(input): Json<GenerateTokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let telegram_id = input.telegram_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("No Telegram ID provided".into()))
    })?;

    let temp_token = token::generate();
    let expires_at = token::expires_at(
        Utc::now().timestamp(),
        state.config.session.temp_token_ttl_secs(),
    );

    PlayerRepo::issue_temp_token(
        &state.db,
        telegram_id,
        input.username.as_deref(),
        &temp_token,
        expires_at,
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::Internal("player record missing after upsert".into()))
    })?;

    tracing::info!(telegram_id, "temp token issued");

    Ok(Json(TokenResponse {
        success: true,
        token: temp_token,
    }))
}

/// POST /api/exchange_token
///
/// Swap a live temp token for a session token. The temp token is cleared and
/// the session token installed in one atomic storage operation; an expired or
/// unknown temp token is rejected with 401.
pub async fn exchange_token(
    State(state): State<AppState>,
    Json(input): Json<ExchangeTokenRequest>,
) -> AppResult<Json<SessionResponse>> {
    let temp_token = input
        .token
        .ok_or_else(|| AppError::Core(CoreError::Validation("No token provided".into())))?;

    let now = Utc::now().timestamp();
    let session_token = token::generate();
    let ttl_secs = state.config.session.session_token_ttl_secs();
    let session_expires_at = token::expires_at(now, ttl_secs);

    let player = PlayerRepo::exchange_temp_token(
        &state.db,
        &temp_token,
        now,
        &session_token,
        session_expires_at,
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid or expired token".into())))?;

    tracing::info!(telegram_id = player.telegram_id, "temp token exchanged for session");

    Ok(Json(SessionResponse {
        success: true,
        session_token,
        expires_in: ttl_secs,
    }))
}
