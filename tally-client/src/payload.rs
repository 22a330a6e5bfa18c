//! Bills payload validation
//!
//! The backend returns either a bare JSON array of bills or the
//! `{ success, message, data }` envelope around one. Anything else is
//! the one fatal condition this crate reports; individually corrupt
//! records are skipped with a log event, never fatal.

use serde_json::Value;
use shared::ApiResponse;
use shared::models::Bill;

use crate::error::{ClientError, ClientResult};

/// Extract the bill list from an untrusted backend payload
///
/// Accepts a bare array, or the standard envelope decoded through
/// [`ApiResponse`]. A non-array payload is an `InvalidResponse`; array
/// elements that fail to decode are skipped.
pub fn parse_bills_payload(payload: Value) -> ClientResult<Vec<Bill>> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(_) => {
            let envelope: ApiResponse<Vec<Value>> = serde_json::from_value(payload)
                .map_err(|e| ClientError::InvalidResponse(format!("bad bills envelope: {e}")))?;
            envelope.data.ok_or_else(|| {
                ClientError::InvalidResponse(
                    "expected bills array, got envelope without data".to_string(),
                )
            })?
        }
        other => {
            return Err(ClientError::InvalidResponse(format!(
                "expected bills array, got {}",
                type_name(&other)
            )));
        }
    };

    let mut bills = Vec::with_capacity(items.len());
    for (pos, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Bill>(item) {
            Ok(bill) => bills.push(bill),
            Err(e) => {
                tracing::warn!(position = pos, error = %e, "skipping undecodable bill record");
            }
        }
    }
    Ok(bills)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
