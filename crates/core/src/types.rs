/// External Telegram user ID; the player's stable identifier.
pub type PlayerId = i64;

/// All token expirations are UTC Unix timestamps in seconds.
pub type UnixSeconds = i64;
