//! Unified error system
//!
//! Provides [`ErrorCode`] for standardized error codes, [`AppError`] as
//! the rich application error type, and [`AppResult`] as the common
//! result alias.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Standardized error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input failed validation
    ValidationFailed,
    /// Resource not found
    NotFound,
    /// Authentication required or rejected
    Unauthorized,
    /// Backend payload had an unexpected shape
    InvalidPayload,
    /// Network-level failure talking to the backend
    NetworkError,
    /// Unclassified internal error
    Internal,
}

impl ErrorCode {
    /// Stable string code for API payloads
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "E0400",
            ErrorCode::NotFound => "E0404",
            ErrorCode::Unauthorized => "E0401",
            ErrorCode::InvalidPayload => "E0422",
            ErrorCode::NetworkError => "E0502",
            ErrorCode::Internal => "E0500",
        }
    }

    /// Default human-readable message for the code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::Unauthorized => "Authentication required",
            ErrorCode::InvalidPayload => "Invalid backend payload",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::Internal => "Internal error",
        }
    }
}

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid-payload error
    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidPayload, msg)
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NetworkError, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::Internal, msg)
    }
}

/// Result type alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let err = AppError::new(ErrorCode::InvalidPayload);
        assert_eq!(err.message, "Invalid backend payload");
        assert_eq!(err.code.code(), "E0422");
    }

    #[test]
    fn test_with_detail() {
        let err = AppError::invalid_payload("expected an array").with_detail("got", "object");
        let details = err.details.unwrap();
        assert_eq!(details["got"], "object");
    }
}
