//! Tally Client - HTTP client for the billing backend
//!
//! Fetches the bill list from the backend REST API and validates the
//! payload shape before it reaches the derivation engine. All business
//! logic stays on the backend; this crate only calls it.

pub mod config;
pub mod error;
pub mod http;
pub mod payload;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use payload::parse_bills_payload;

// Re-export shared types for convenience
pub use shared::models::Bill;
pub use shared::response::ApiResponse;
