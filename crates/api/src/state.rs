use std::sync::Arc;

use mongodb::Database;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once at startup and injected into the router; handlers never
/// reach for ambient connection state. Cheaply cloneable (the MongoDB handle
/// is internally pooled).
#[derive(Clone)]
pub struct AppState {
    /// MongoDB database handle.
    pub db: Database,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
