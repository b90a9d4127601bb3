//! Opaque session-token generation.
//!
//! Both temp tokens (short-lived, embedded in a deep link) and session tokens
//! (longer-lived bearer credentials) are opaque random strings. Collision
//! resistance rests on UUIDv4 randomness; the storage layer enforces no
//! uniqueness constraint on token values.

use uuid::Uuid;

use crate::types::UnixSeconds;

/// Generate a fresh opaque token.
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}

/// Compute an expiration timestamp `ttl_secs` from `now`.
pub fn expires_at(now: UnixSeconds, ttl_secs: i64) -> UnixSeconds {
    now + ttl_secs
}
