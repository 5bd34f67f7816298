//! Trust classification returned by the remote trust service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::RemoteTrustError;

/// `v` is either a string or a number on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrustValue {
    Text(String),
    Number(serde_json::Number),
}

/// Ephemeral server verdict for the current token. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustClassification {
    #[serde(rename = "type")]
    pub kind: String,
    pub v: TrustValue,
}

impl TrustClassification {
    /// Decode a 200 response body. Both `type` and `v` must be present.
    pub fn from_response_body(body: &[u8]) -> Result<Self, RemoteTrustError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| RemoteTrustError::Malformed(format!("invalid json: {e}")))?;

        let kind = match value.get("type") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => {
                return Err(RemoteTrustError::Malformed(format!(
                    "unexpected `type`: {other}"
                )))
            }
            None => return Err(RemoteTrustError::Malformed("missing `type`".to_string())),
        };

        let v = match value.get("v") {
            Some(Value::String(s)) => TrustValue::Text(s.clone()),
            Some(Value::Number(n)) => TrustValue::Number(n.clone()),
            Some(other) => {
                return Err(RemoteTrustError::Malformed(format!(
                    "unexpected `v`: {other}"
                )))
            }
            None => return Err(RemoteTrustError::Malformed("missing `v`".to_string())),
        };

        Ok(Self { kind, v })
    }
}
