//! Domain primitives shared by the GWC backend crates: the error taxonomy,
//! common ID/timestamp types, and session-token generation.

pub mod error;
pub mod token;
pub mod types;
