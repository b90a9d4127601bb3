use crate::types::PlayerId;

/// Domain-level error taxonomy shared across crates.
///
/// The API crate maps each variant to an HTTP status and the uniform
/// `{ "success": false, "error": ... }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: PlayerId },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
