//! Repository for the `users` collection.
//!
//! All operations are single-document finds and find-and-updates, each atomic
//! at the storage layer. Concurrent updates to the same player race under
//! last-write-wins semantics; there is no optimistic-concurrency token.

use gwc_core::types::{PlayerId, UnixSeconds};
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::models::player::{
    self, Player, CURRENT_UNIVERSE, DEFAULT_UNIVERSE, SESSION_TOKEN, SESSION_TOKEN_EXPIRATION,
    TELEGRAM_ID, TEMP_TOKEN, TEMP_TOKEN_EXPIRATION, TOTAL_CLICKS, UNIVERSES, USERNAME,
};

/// Provides find/upsert/update primitives keyed by `telegram_id`.
pub struct PlayerRepo;

impl PlayerRepo {
    fn collection(db: &Database) -> Collection<Player> {
        db.collection(player::COLLECTION)
    }

    /// Look up a player by Telegram ID.
    pub async fn find_by_telegram_id(
        db: &Database,
        telegram_id: PlayerId,
    ) -> Result<Option<Player>, mongodb::error::Error> {
        Self::collection(db)
            .find_one(doc! { TELEGRAM_ID: telegram_id })
            .await
    }

    /// Create the player with default sub-state if absent; otherwise leave
    /// all progress fields unchanged ("set-on-insert" semantics). A provided
    /// username overwrites the stored one either way.
    ///
    /// Returns the record as stored after the upsert.
    pub async fn upsert_defaults(
        db: &Database,
        telegram_id: PlayerId,
        username: Option<&str>,
    ) -> Result<Option<Player>, mongodb::error::Error> {
        let mut update = doc! { "$setOnInsert": default_fields() };
        if let Some(name) = username {
            update.insert("$set", doc! { USERNAME: name });
        }

        Self::collection(db)
            .update_one(doc! { TELEGRAM_ID: telegram_id }, update)
            .upsert(true)
            .await?;

        Self::find_by_telegram_id(db, telegram_id).await
    }

    /// Overwrite `totalClicks`, optionally `currentUniverse`, and optionally
    /// the sub-document at `universes.<target>` (a full replace of that
    /// sub-tree; other universes are untouched).
    ///
    /// When `upgrades` is submitted without an explicit universe, the
    /// player's stored `currentUniverse` is the target. Returns `None` when
    /// the player does not exist; updates never upsert.
    pub async fn apply_update(
        db: &Database,
        telegram_id: PlayerId,
        total_clicks: i64,
        current_universe: Option<&str>,
        upgrades: Option<Document>,
    ) -> Result<Option<Player>, mongodb::error::Error> {
        let target_universe = match (&upgrades, current_universe) {
            (Some(_), Some(universe)) => Some(universe.to_string()),
            (Some(_), None) => match Self::find_by_telegram_id(db, telegram_id).await? {
                Some(existing) => Some(existing.current_universe),
                None => return Ok(None),
            },
            (None, _) => None,
        };

        let update = update_document(
            total_clicks,
            current_universe,
            target_universe.as_deref(),
            upgrades,
        );

        Self::collection(db)
            .find_one_and_update(doc! { TELEGRAM_ID: telegram_id }, update)
            .return_document(ReturnDocument::After)
            .await
    }

    /// Ensure the record exists (creating it with default sub-state if not)
    /// and install a temp token with its expiration.
    pub async fn issue_temp_token(
        db: &Database,
        telegram_id: PlayerId,
        username: Option<&str>,
        token: &str,
        expires_at: UnixSeconds,
    ) -> Result<Option<Player>, mongodb::error::Error> {
        Self::collection(db)
            .update_one(
                doc! { TELEGRAM_ID: telegram_id },
                temp_token_update(username, token, expires_at),
            )
            .upsert(true)
            .await?;

        Self::find_by_telegram_id(db, telegram_id).await
    }

    /// Atomically swap a live temp token for a session token.
    ///
    /// The filter requires `temp_token_expiration > now`, so an expired temp
    /// token is indistinguishable from an absent one. On match, the temp pair
    /// is unset and the session pair installed in the same operation.
    pub async fn exchange_temp_token(
        db: &Database,
        temp_token: &str,
        now: UnixSeconds,
        session_token: &str,
        session_expires_at: UnixSeconds,
    ) -> Result<Option<Player>, mongodb::error::Error> {
        Self::collection(db)
            .find_one_and_update(
                live_temp_token_filter(temp_token, now),
                exchange_update(session_token, session_expires_at),
            )
            .return_document(ReturnDocument::After)
            .await
    }

    /// Resolve a player from an unexpired session token.
    pub async fn find_by_session_token(
        db: &Database,
        session_token: &str,
        now: UnixSeconds,
    ) -> Result<Option<Player>, mongodb::error::Error> {
        Self::collection(db)
            .find_one(doc! {
                SESSION_TOKEN: session_token,
                SESSION_TOKEN_EXPIRATION: { "$gt": now },
            })
            .await
    }
}

/// Default sub-state installed on first authentication.
fn default_fields() -> Document {
    doc! {
        TOTAL_CLICKS: 0_i64,
        CURRENT_UNIVERSE: DEFAULT_UNIVERSE,
        UNIVERSES: {},
    }
}

/// Build the upsert update for [`PlayerRepo::issue_temp_token`]: defaults go
/// through `$setOnInsert` so an existing record keeps its progress, while the
/// temp-token pair (and username, when given) is `$set` unconditionally.
fn temp_token_update(username: Option<&str>, token: &str, expires_at: UnixSeconds) -> Document {
    let mut set = doc! {
        TEMP_TOKEN: token,
        TEMP_TOKEN_EXPIRATION: expires_at,
    };
    if let Some(name) = username {
        set.insert(USERNAME, name);
    }
    doc! { "$setOnInsert": default_fields(), "$set": set }
}

/// Filter matching a temp token that has not yet expired. Expired tokens fail
/// the `$gt` comparison, so they are indistinguishable from absent ones.
fn live_temp_token_filter(temp_token: &str, now: UnixSeconds) -> Document {
    doc! {
        TEMP_TOKEN: temp_token,
        TEMP_TOKEN_EXPIRATION: { "$gt": now },
    }
}

/// Build the update for [`PlayerRepo::exchange_temp_token`]: unsets the temp
/// pair and installs the session pair in the same operation, keeping the two
/// pairs mutually exclusive in time.
fn exchange_update(session_token: &str, session_expires_at: UnixSeconds) -> Document {
    doc! {
        "$unset": { TEMP_TOKEN: "", TEMP_TOKEN_EXPIRATION: "" },
        "$set": {
            SESSION_TOKEN: session_token,
            SESSION_TOKEN_EXPIRATION: session_expires_at,
        },
    }
}

/// Build the `$set` update for [`PlayerRepo::apply_update`].
fn update_document(
    total_clicks: i64,
    current_universe: Option<&str>,
    target_universe: Option<&str>,
    upgrades: Option<Document>,
) -> Document {
    let mut set = doc! { TOTAL_CLICKS: total_clicks };
    if let Some(universe) = current_universe {
        set.insert(CURRENT_UNIVERSE, universe);
    }
    if let (Some(upgrades), Some(name)) = (upgrades, target_universe) {
        // Dotted path: replaces exactly the named universe's sub-document.
        set.insert(format!("{UNIVERSES}.{name}"), upgrades);
    }
    doc! { "$set": set }
}
