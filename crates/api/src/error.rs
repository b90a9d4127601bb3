use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gwc_core::error::CoreError;
use mongodb::error::ErrorKind;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform
/// `{ "success": false, "error": ... }` JSON envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gwc-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from the MongoDB driver.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Funnel every variant through the domain taxonomy so each failure
        // class has exactly one status mapping.
        let core = match self {
            AppError::Core(core) => core,
            AppError::Database(err) => classify_mongodb_error(&err),
            AppError::Internal(msg) => CoreError::Internal(msg),
        };

        let (status, message) = match core {
            CoreError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                format!("{entity} with id {id} not found"),
            ),
            CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            CoreError::Unavailable(msg) => {
                tracing::error!(error = %msg, "Database unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Database unavailable".to_string(),
                )
            }
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a MongoDB driver error into the domain taxonomy.
///
/// Connectivity failures (server selection, I/O) become
/// [`CoreError::Unavailable`]; everything else is an internal error. Both
/// render with a sanitized message.
fn classify_mongodb_error(err: &mongodb::error::Error) -> CoreError {
    match &*err.kind {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            CoreError::Unavailable(err.to_string())
        }
        _ => CoreError::Internal(format!("database error: {err}")),
    }
}
