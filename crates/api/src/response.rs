//! Shared response envelope types for API handlers.
//!
//! Success bodies always carry `"success": true`; failures are rendered by
//! [`crate::error::AppError`] as `{ "success": false, "error": ... }`. Use
//! [`Ack`] for endpoints whose success payload is the bare envelope.

use serde::Serialize;

/// Bare `{ "success": true }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
