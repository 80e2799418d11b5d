//! Shared application state
//!
//! Built once at startup and shared by every handler, so all clients work
//! against the same encounter service rather than one per request.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::outbound::{KeyValueStorePort, MonsterCatalogPort};
use crate::application::services::{EncounterService, MonsterCatalogService};
use crate::infrastructure::config::{AppConfig, RosterStoreBackend};
use crate::infrastructure::notifications::BroadcastNotifier;
use crate::infrastructure::open5e::Open5eClient;
use crate::infrastructure::persistence::{InMemoryKeyValueStore, SqliteKeyValueStore};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub notifier: Arc<BroadcastNotifier>,
    // Application services
    pub encounter_service: EncounterService,
    pub monster_catalog_service: MonsterCatalogService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        // Initialize roster storage
        let store: Arc<dyn KeyValueStorePort> = match config.roster_store {
            RosterStoreBackend::Sqlite => Arc::new(
                SqliteKeyValueStore::connect(&config.database_url)
                    .await
                    .with_context(|| format!("Failed to open {}", config.database_url))?,
            ),
            RosterStoreBackend::Memory => {
                tracing::warn!("Using in-memory roster storage; the encounter will not survive a restart");
                Arc::new(InMemoryKeyValueStore::new())
            }
        };

        // Initialize Open5e client
        let catalog: Arc<dyn MonsterCatalogPort> =
            Arc::new(Open5eClient::new(&config.open5e_base_url));

        Ok(Self::with_adapters(config, store, catalog).await)
    }

    /// Assemble state from already-built adapters
    pub async fn with_adapters(
        config: AppConfig,
        store: Arc<dyn KeyValueStorePort>,
        catalog: Arc<dyn MonsterCatalogPort>,
    ) -> Self {
        let notifier = Arc::new(BroadcastNotifier::new(config.notification_capacity));

        // Initialize application services
        let encounter_service =
            EncounterService::load(store, notifier.clone(), config.roster_storage_key.clone())
                .await;
        let monster_catalog_service = MonsterCatalogService::new(
            catalog,
            config.open5e_document_slug.clone(),
            config.monster_page_size,
        );

        Self {
            config,
            notifier,
            encounter_service,
            monster_catalog_service,
        }
    }
}
