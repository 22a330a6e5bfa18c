//! API Response types
//!
//! The backend wraps most payloads in a `{ success, message, data }`
//! envelope; some endpoints return bare data. Every field is defaulted
//! so both shapes deserialize.

use serde::{Deserialize, Serialize};

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    #[serde(default)]
    pub success: bool,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_roundtrip() {
        let resp = ApiResponse::ok(vec![1, 2, 3]);
        let json = serde_json::to_string(&resp).unwrap();
        let back: ApiResponse<Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert!(back.success);
        assert_eq!(back.data.unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_sparse_envelope_deserializes() {
        let back: ApiResponse<Vec<i32>> = serde_json::from_str("{}").unwrap();
        assert!(!back.success);
        assert!(back.data.is_none());
    }
}
