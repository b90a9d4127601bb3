//! HTTP surface for the GWC clicker backend.
//!
//! Exposes the player authentication, progress-update, and session-token
//! endpoints over axum, backed by the repositories in `gwc-db`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
