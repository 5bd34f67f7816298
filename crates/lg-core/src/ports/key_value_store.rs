use serde_json::Value;

use crate::errors::StorageError;

/// Durable key-value store (opaque persistence layer).
///
/// 键值存储端口：单键读写视为原子操作，不需要跨键事务。
///
/// Absence of a key is a distinct state from any stored value, including
/// `null`.
pub trait KeyValueStorePort: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Set a value by key, persisting before returning.
    fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Delete a value by key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}
