//! Client error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format (e.g. bills payload is not an array)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => AppError::with_message(ErrorCode::NetworkError, e.to_string()),
            ClientError::InvalidResponse(msg) => AppError::invalid_payload(msg),
            ClientError::Unauthorized => AppError::new(ErrorCode::Unauthorized),
            ClientError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            ClientError::Validation(msg) => AppError::validation(msg),
            ClientError::Internal(msg) => AppError::internal(msg),
            ClientError::Serialization(e) => AppError::invalid_payload(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_app_error_codes() {
        let err: AppError = ClientError::InvalidResponse("not an array".to_string()).into();
        assert_eq!(err.code, ErrorCode::InvalidPayload);
        assert_eq!(err.message, "not an array");

        let err: AppError = ClientError::Unauthorized.into();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }
}
