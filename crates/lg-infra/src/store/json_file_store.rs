//! Key-value store persisted as a single JSON object file.
//!
//! 单文件 JSON 键值存储：写入先落临时文件再原子重命名。

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use lg_core::{ports::KeyValueStorePort, StorageError};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// File-backed [`KeyValueStorePort`].
///
/// The whole document is loaded on first access and kept in memory; every
/// `set`/`delete` rewrites the file before returning.
pub struct JsonFileStore {
    path: PathBuf,
    cache: Mutex<Option<Map<String, Value>>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Option<Map<String, Value>>> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("json store cache lock poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    fn load(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file missing, starting empty");
                return Ok(Map::new());
            }
            Err(e) => {
                return Err(StorageError::Unavailable(format!(
                    "read {} failed: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(StorageError::Corrupt {
                key: self.path.display().to_string(),
                reason: format!("expected a JSON object, found {}", kind_of(&other)),
            }),
            Err(e) => Err(StorageError::Corrupt {
                key: self.path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn with_document<T>(
        &self,
        f: impl FnOnce(&mut Map<String, Value>) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut guard = self.lock();
        if guard.is_none() {
            *guard = Some(self.load()?);
        }
        match guard.as_mut() {
            Some(document) => f(document),
            None => Err(StorageError::Unavailable("store not loaded".to_string())),
        }
    }

    fn atomic_write(&self, document: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                StorageError::Unavailable(format!("create store dir {} failed: {e}", dir.display()))
            })?;
        }

        let content = serde_json::to_string_pretty(document)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(|e| {
            StorageError::Unavailable(format!("write {} failed: {e}", tmp_path.display()))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            StorageError::Unavailable(format!(
                "rename {} -> {} failed: {e}",
                tmp_path.display(),
                self.path.display()
            ))
        })
    }
}

impl KeyValueStorePort for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        self.with_document(|document| Ok(document.get(key).cloned()))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.with_document(|document| {
            let previous = document.insert(key.to_string(), value);
            if let Err(e) = self.atomic_write(document) {
                // Keep memory consistent with disk.
                match previous {
                    Some(previous) => document.insert(key.to_string(), previous),
                    None => document.remove(key),
                };
                return Err(e);
            }
            Ok(())
        })
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.with_document(|document| {
            let Some(previous) = document.remove(key) else {
                return Ok(());
            };
            if let Err(e) = self.atomic_write(document) {
                document.insert(key.to_string(), previous);
                return Err(e);
            }
            Ok(())
        })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
