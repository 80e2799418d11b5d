//! Outbound ports - Interfaces that the application requires from external systems

mod key_value_store_port;
mod monster_catalog_port;
mod roster_observer_port;

pub use key_value_store_port::{KeyValueStorePort, StorageError};
pub use monster_catalog_port::{CatalogError, MonsterCatalogPort, MonsterPage, MonsterQuery};
pub use roster_observer_port::{NotificationError, RosterObserverPort};
