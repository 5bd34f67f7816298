//! Identity Store: typed access to the persisted install identity, window
//! geometry and the cached feature flag.
//!
//! 身份存储：在键值存储之上提供类型化访问。

use std::sync::Arc;

use lg_core::{
    ids::IdentityToken,
    ports::KeyValueStorePort,
    store_keys::{DARK_THEME, LAST_DATA_WINDOW, USER_TOKEN},
    window::WindowGeometry,
    StorageError,
};
use serde_json::Value;
use tracing::{debug, info};

#[derive(Clone)]
pub struct IdentityStore {
    store: Arc<dyn KeyValueStorePort>,
}

impl IdentityStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Return the stored token, or generate, persist and return a new UUID-v4.
    ///
    /// A stored string is returned exactly as stored. A non-string or empty
    /// value is reported as corrupt and left untouched.
    pub fn get_or_create_token(&self) -> Result<IdentityToken, StorageError> {
        match self.store.get(USER_TOKEN)? {
            Some(Value::String(raw)) => {
                let token = IdentityToken::parse(&raw).map_err(|e| StorageError::Corrupt {
                    key: USER_TOKEN.to_string(),
                    reason: e.to_string(),
                })?;
                if !token.is_uuid_v4() {
                    debug!("stored install identity is not a UUID-v4, using it as is");
                }
                Ok(token)
            }
            Some(other) => Err(StorageError::Corrupt {
                key: USER_TOKEN.to_string(),
                reason: format!("expected string, found {other}"),
            }),
            None => {
                let token = IdentityToken::generate();
                self.store
                    .set(USER_TOKEN, Value::String(token.as_str().to_string()))?;
                info!("Generated new install identity");
                Ok(token)
            }
        }
    }

    pub fn geometry(&self) -> Result<Option<WindowGeometry>, StorageError> {
        let Some(value) = self.store.get(LAST_DATA_WINDOW)? else {
            return Ok(None);
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: LAST_DATA_WINDOW.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn save_geometry(&self, geometry: &WindowGeometry) -> Result<(), StorageError> {
        let value = serde_json::to_value(geometry)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(LAST_DATA_WINDOW, value)
    }

    /// Cached flag. Anything other than a JSON boolean counts as absent.
    pub fn flag(&self) -> Result<Option<bool>, StorageError> {
        match self.store.get(DARK_THEME)? {
            Some(Value::Bool(flag)) => Ok(Some(flag)),
            Some(other) => {
                debug!(value = %other, "ignoring non-boolean cached flag");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    pub fn set_flag(&self, flag: bool) -> Result<(), StorageError> {
        self.store.set(DARK_THEME, Value::Bool(flag))
    }
}
