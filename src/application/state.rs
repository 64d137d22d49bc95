// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{create_connection_pool, get_connection, initialize_database};
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{AniListClient, AnimeCatalog};
use crate::repositories::{KeyValueRepository, SqliteKeyValueRepository};
use crate::services::{CatalogService, CollectionStore, CollectionSync, SyncGuard};

/// Everything a front end needs: the collection store, the catalog and the
/// event bus that carries focus changes.
///
/// The store reloads on `WindowFocused` for as long as this state is alive.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub collection_store: Arc<CollectionStore>,
    pub catalog_service: Arc<CatalogService>,
    _sync: SyncGuard,
}

impl AppState {
    pub fn new(
        storage: Arc<dyn KeyValueRepository>,
        catalog: Arc<dyn AnimeCatalog>,
        default_per_page: u32,
    ) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let collection_store = Arc::new(CollectionStore::new(storage));
        let sync = CollectionSync::attach(Arc::clone(&collection_store), &event_bus);
        let catalog_service = Arc::new(CatalogService::new(catalog, default_per_page));

        Self {
            event_bus,
            collection_store,
            catalog_service,
            _sync: sync,
        }
    }

    /// Wire SQLite storage and the AniList client from configuration
    pub fn bootstrap(config: &AppConfig) -> AppResult<Self> {
        let pool = create_connection_pool(config)?;
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        let storage: Arc<dyn KeyValueRepository> =
            Arc::new(SqliteKeyValueRepository::new(Arc::new(pool)));
        let catalog: Arc<dyn AnimeCatalog> = Arc::new(AniListClient::new(config)?);

        log::info!("Using data directory {}", config.data_dir.display());
        Ok(Self::new(storage, catalog, config.default_per_page))
    }
}
