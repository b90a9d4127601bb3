//! Client log relay and on-demand game-state backups.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use gwc_core::error::CoreError;
use gwc_core::types::PlayerId;
use gwc_db::repositories::BackupRepo;
use mongodb::bson::Document;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::Ack;
use crate::state::AppState;

/// Request body for `POST /api/log`.
#[derive(Debug, Deserialize)]
pub struct LogRequest {
    pub message: Option<String>,
}

/// Request body for `POST /api/backup`.
#[derive(Debug, Deserialize)]
pub struct BackupRequest {
    pub telegram_id: Option<PlayerId>,
    #[serde(rename = "gameData")]
    pub game_data: Option<Document>,
}

/// POST /api/log
///
/// Record a free-form client diagnostic line for operational visibility.
pub async fn log(Json(input): Json<LogRequest>) -> AppResult<Json<Ack>> {
    let message = input
        .message
        .ok_or_else(|| AppError::Core(CoreError::Validation("No message provided".into())))?;

    tracing::info!(client_message = %message, "client log");

    Ok(Json(Ack::ok()))
}

/// POST /api/backup
///
/// Append a snapshot of the submitted game state to the backup log. The log
/// is write-only: snapshots are never read back or pruned.
pub async fn backup(
    State(state): State<AppState>,
    Json(input): Json<BackupRequest>,
) -> AppResult<Json<Ack>> {
    let telegram_id = input.telegram_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("No Telegram ID provided".into()))
    })?;
    let game_data = input
        .game_data
        .ok_or_else(|| AppError::Core(CoreError::Validation("No gameData provided".into())))?;

    BackupRepo::insert(&state.db, telegram_id, game_data, Utc::now().timestamp()).await?;

    tracing::info!(telegram_id, "game state backed up");

    Ok(Json(Ack::ok()))
}
