//! Key-value store port - Durable, device-local string storage
//!
//! The encounter roster is mirrored under a single key. Implementations
//! overwrite the whole value on every write; there are no partial updates.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing was ever written
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
