//! MongoDB connectivity and repositories for the GWC backend.
//!
//! The database handle is constructed once at startup via [`connect`] and
//! passed into handlers through the API crate's `AppState`; nothing in this
//! crate holds global connection state.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

pub mod models;
pub mod repositories;

use models::player;

/// Number of times the startup connectivity check is attempted before the
/// failure is reported to the caller. Per-request operations are never
/// retried.
const CONNECT_ATTEMPTS: u32 = 5;

/// Fixed delay between startup connectivity attempts.
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Connect to MongoDB and verify connectivity with a bounded retry loop.
///
/// The ping is retried [`CONNECT_ATTEMPTS`] times with a fixed
/// [`CONNECT_RETRY_DELAY`] between attempts; the last error is returned if
/// every attempt fails. The returned [`Database`] is cheaply cloneable and
/// internally pooled.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let options = ClientOptions::parse(uri).await?;
    let client = Client::with_options(options)?;
    let db = client.database(db_name);

    let mut attempt = 1;
    loop {
        match health_check(&db).await {
            Ok(()) => return Ok(db),
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                tracing::warn!(attempt, error = %e, "MongoDB ping failed, retrying");
                tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Single `ping` round trip; used by `/health` and the startup check.
pub async fn health_check(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// Declare the indexes the repositories rely on.
///
/// `users.telegram_id` is unique so a player identifier maps to at most one
/// player document.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let unique_telegram_id = IndexModel::builder()
        .keys(doc! { player::TELEGRAM_ID: 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    db.collection::<player::Player>(player::COLLECTION)
        .create_index(unique_telegram_id)
        .await?;
    Ok(())
}
