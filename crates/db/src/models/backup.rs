//! Backup snapshot model for the `backups` collection.

use gwc_core::types::{PlayerId, UnixSeconds};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Append-only collection of on-demand game-state snapshots. Documents are
/// written by the backup endpoint and never read back or pruned.
pub const COLLECTION: &str = "backups";

/// A snapshot of a player's game state at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    pub user_id: PlayerId,
    #[serde(rename = "gameData")]
    pub game_data: Document,
    pub timestamp: UnixSeconds,
}
