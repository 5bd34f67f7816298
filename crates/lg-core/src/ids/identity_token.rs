use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::{Uuid, Version};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("identity token is empty")]
pub struct InvalidIdentityToken;

/// Stable per-install identifier.
///
/// Generated as a UUID-v4 on first run. A stored value is opaque and kept
/// byte-for-byte; it is never normalized or overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityToken(String);

impl IdentityToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap a stored value exactly as stored. Only an empty string is rejected.
    pub fn parse(value: &str) -> Result<Self, InvalidIdentityToken> {
        if value.is_empty() {
            return Err(InvalidIdentityToken);
        }
        Ok(Self(value.to_string()))
    }

    /// Whether the token has the layout `generate` produces.
    pub fn is_uuid_v4(&self) -> bool {
        Uuid::parse_str(&self.0).is_ok_and(|uuid| uuid.get_version() == Some(Version::Random))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for IdentityToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for IdentityToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
