//! Handlers for player authentication and progress updates.

use axum::extract::{Path, State};
use axum::Json;
use gwc_core::error::CoreError;
use gwc_core::types::PlayerId;
use gwc_db::models::player::Player;
use gwc_db::repositories::PlayerRepo;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthPlayer;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth`.
///
/// `telegram_id` is required; its absence is reported as a named 400 error
/// rather than a deserialization failure so the client sees the uniform
/// envelope.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub telegram_id: Option<PlayerId>,
    pub username: Option<String>,
}

/// Request body for `PUT /api/users`.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub telegram_id: Option<PlayerId>,
    #[serde(rename = "totalClicks")]
    pub total_clicks: Option<i64>,
    #[serde(rename = "currentUniverse")]
    pub current_universe: Option<String>,
    /// Full replacement for the sub-document at the target universe.
    pub upgrades: Option<Document>,
}

/// Player progress view returned by the auth, update, and read endpoints.
///
/// Excludes the internal storage key and the token credentials.
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub success: bool,
    pub telegram_id: PlayerId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "totalClicks")]
    pub total_clicks: i64,
    #[serde(rename = "currentUniverse")]
    pub current_universe: String,
    pub universes: Document,
}

impl PlayerResponse {
    fn from_player(player: Player) -> Self {
        Self {
            success: true,
            telegram_id: player.telegram_id,
            username: player.username,
            total_clicks: player.total_clicks,
            current_universe: player.current_universe,
            universes: player.universes,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth
///
/// Idempotent authentication: creates the player with default sub-state on
/// first sight, otherwise returns the existing record unchanged (a submitted
/// username overwrites the stored one either way).
pub async fn authenticate(
    State(state): State<AppState>,
    Json(input): Json<AuthRequest>,
) -> AppResult<Json<PlayerResponse>> {
    let telegram_id = input.telegram_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("No Telegram ID provided".into()))
    })?;

    let player = PlayerRepo::upsert_defaults(&state.db, telegram_id, input.username.as_deref())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal("player record missing after upsert".into()))
        })?;

    tracing::info!(telegram_id, username = ?player.username, "player authenticated");

    Ok(Json(PlayerResponse::from_player(player)))
}

/// PUT /api/users
///
/// Whole-field overwrite of `totalClicks`, optionally `currentUniverse`, and
/// optionally the sub-document at the target universe. Requires an existing
/// player; updates never upsert (authentication is the creation path).
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateRequest>,
) -> AppResult<Json<PlayerResponse>> {
    let telegram_id = input.telegram_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("No Telegram ID provided".into()))
    })?;
    let total_clicks = input.total_clicks.ok_or_else(|| {
        AppError::Core(CoreError::Validation("No totalClicks provided".into()))
    })?;
    // Absolute client-supplied value, trusted as-is apart from the shape
    // constraint. No monotonicity check.
    if total_clicks < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "totalClicks must be non-negative".into(),
        )));
    }

    let player = PlayerRepo::apply_update(
        &state.db,
        telegram_id,
        total_clicks,
        input.current_universe.as_deref(),
        input.upgrades,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Player",
        id: telegram_id,
    }))?;

    tracing::info!(telegram_id, total_clicks, "player progress updated");

    Ok(Json(PlayerResponse::from_player(player)))
}

/// GET /api/user/{telegram_id}
///
/// Full progress view for a player, or 404.
pub async fn get_player(
    State(state): State<AppState>,
    Path(telegram_id): Path<PlayerId>,
) -> AppResult<Json<PlayerResponse>> {
    let player = PlayerRepo::find_by_telegram_id(&state.db, telegram_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Player",
            id: telegram_id,
        }))?;

    Ok(Json(PlayerResponse::from_player(player)))
}

/// GET /api/me
///
/// Progress view for the player resolved from the bearer session token.
pub async fn me(auth: AuthPlayer) -> AppResult<Json<PlayerResponse>> {
    Ok(Json(PlayerResponse::from_player(auth.player)))
}
