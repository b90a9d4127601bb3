//! Player document model for the `users` collection.

use gwc_core::types::{PlayerId, UnixSeconds};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Collection holding one document per player.
pub const COLLECTION: &str = "users";

/// Universe selected for players that have never switched.
pub const DEFAULT_UNIVERSE: &str = "default";

// Field names, shared with the repository's update documents. The camelCase
// progress fields match the wire format the game client uses.
pub const TELEGRAM_ID: &str = "telegram_id";
pub const USERNAME: &str = "username";
pub const TOTAL_CLICKS: &str = "totalClicks";
pub const CURRENT_UNIVERSE: &str = "currentUniverse";
pub const UNIVERSES: &str = "universes";
pub const TEMP_TOKEN: &str = "temp_token";
pub const TEMP_TOKEN_EXPIRATION: &str = "temp_token_expiration";
pub const SESSION_TOKEN: &str = "session_token";
pub const SESSION_TOKEN_EXPIRATION: &str = "session_token_expiration";

/// A document from the `users` collection.
///
/// Progress fields default when absent so documents written by older
/// backend revisions (flat leveling fields only) still deserialize; their
/// legacy keys ride along inside the free-form universe sub-documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Internal storage key; never exposed through the API.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub telegram_id: PlayerId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Client-authoritative absolute counter; the server performs no
    /// monotonicity check.
    #[serde(rename = "totalClicks", default)]
    pub total_clicks: i64,

    #[serde(rename = "currentUniverse", default = "default_universe")]
    pub current_universe: String,

    /// Free-form per-universe upgrade sub-documents. Updates replace the
    /// named sub-document wholesale; other universes are untouched.
    #[serde(default)]
    pub universes: Document,

    // Token pairs are mutually exclusive in time: the temp pair is unset by
    // the exchange operation that sets the session pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_token_expiration: Option<UnixSeconds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token_expiration: Option<UnixSeconds>,
}

fn default_universe() -> String {
    DEFAULT_UNIVERSE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn deserializes_minimal_legacy_document() {
        // Documents created before the universes model carry only the
        // identifier and counter.
        let legacy = doc! {
            "telegram_id": 42_i64,
            "totalClicks": 17_i64,
        };

        let player: Player = mongodb::bson::from_document(legacy).expect("legacy doc must parse");
        assert_eq!(player.telegram_id, 42);
        assert_eq!(player.total_clicks, 17);
        assert_eq!(player.current_universe, DEFAULT_UNIVERSE);
        assert!(player.universes.is_empty());
        assert!(player.session_token.is_none());
    }

    #[test]
    fn internal_id_is_not_serialized_when_absent() {
        let player = Player {
            id: None,
            telegram_id: 1,
            username: Some("ann".into()),
            total_clicks: 0,
            current_universe: DEFAULT_UNIVERSE.into(),
            universes: Document::new(),
            temp_token: None,
            temp_token_expiration: None,
            session_token: None,
            session_token_expiration: None,
        };

        let doc = mongodb::bson::to_document(&player).expect("player must serialize");
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("currentUniverse").unwrap(), "default");
    }
}
