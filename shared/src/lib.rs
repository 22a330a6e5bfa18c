//! Shared types for the Tally admin panel
//!
//! Common types used across multiple crates: the Bill record shape as
//! returned by the billing backend, the derived view structures produced
//! by the engine, error types, and the API response envelope.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
