//! Server-controlled feature flag resolved through a hash commitment.
//!
//! The client only embeds the target digest. The input that satisfies it is
//! not recoverable from the client.

use serde_json::Value;

use crate::crypto::commitment_matches;
use crate::errors::RemoteConfigError;

/// Opaque target commitment. Keep as-is: issued targets are compared verbatim.
pub const FLAG_COMMITMENT_TARGET: &str = "e35f91eb23e9f59b46bbcec92a1a42e7";

/// The two opaque values served by the flag source endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSource {
    pub a: String,
    pub b: String,
}

impl FlagSource {
    /// Decode a 200 response body. Both `a` and `b` must be strings.
    pub fn from_response_body(body: &[u8]) -> Result<Self, RemoteConfigError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| RemoteConfigError::Malformed(format!("invalid json: {e}")))?;

        let field = |name: &str| -> Result<String, RemoteConfigError> {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| RemoteConfigError::Malformed(format!("missing `{name}`")))
        };

        Ok(Self {
            a: field("a")?,
            b: field("b")?,
        })
    }

    /// `true` iff the commitment of `(a, b)` equals `target`.
    pub fn evaluate(&self, target: &str) -> bool {
        commitment_matches(&self.a, &self.b, target)
    }
}
