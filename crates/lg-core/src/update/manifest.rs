use serde::Serialize;
use serde_json::Value;

use crate::errors::UpdateCheckError;

/// Remote-advertised latest release. Fetched fresh on every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateManifest {
    pub version: String,
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

impl UpdateManifest {
    /// Decode a 200 response body. `version` and `downloadUrl` must be
    /// non-empty strings.
    pub fn from_response_body(body: &[u8]) -> Result<Self, UpdateCheckError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| UpdateCheckError::Malformed(format!("invalid json: {e}")))?;

        let field = |name: &str| -> Result<String, UpdateCheckError> {
            match value.get(name).and_then(Value::as_str) {
                Some(s) if !s.is_empty() => Ok(s.to_string()),
                _ => Err(UpdateCheckError::Malformed(format!("missing `{name}`"))),
            }
        };

        Ok(Self {
            version: field("version")?,
            download_url: field("downloadUrl")?,
        })
    }

    /// Exact string comparison, not semantic ordering: any difference
    /// (including an older remote version) is offered as an update.
    pub fn differs_from(&self, running_version: &str) -> bool {
        self.version != running_version
    }
}
