//! Repository for the `backups` collection.

use gwc_core::types::{PlayerId, UnixSeconds};
use mongodb::bson::Document;
use mongodb::Database;

use crate::models::backup::{self, Backup};

/// Append-only writer for on-demand game-state snapshots.
pub struct BackupRepo;

impl BackupRepo {
    /// Record a snapshot of `game_data` for the given player.
    pub async fn insert(
        db: &Database,
        user_id: PlayerId,
        game_data: Document,
        timestamp: UnixSeconds,
    ) -> Result<(), mongodb::error::Error> {
        let snapshot = Backup {
            user_id,
            game_data,
            timestamp,
        };
        db.collection::<Backup>(backup::COLLECTION)
            .insert_one(&snapshot)
            .await?;
        Ok(())
    }
}
