//! Persistence adapters
//!
//! Key-value stores that mirror the encounter roster across restarts.

mod memory_key_value_store;
mod sqlite_key_value_store;

pub use memory_key_value_store::InMemoryKeyValueStore;
pub use sqlite_key_value_store::SqliteKeyValueStore;
