// src/lib.rs
// Wikinime - anime catalog browser with locally saved collections
//
// Architecture:
// - Domain-centric: collection rules live in `domain`, free of I/O
// - Single writer: every collection change goes through `CollectionStore::dispatch`
// - Storage behind a port: SQLite in production, in-memory in tests
// - Focus-driven sync: a focused window reloads collections from storage
// - Application Layer: the boundary any front end talks to

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    sanitize_collection_name,
    validate_collection_name,
    validate_selection,
    // Anime
    Anime,
    AnimeId,
    AnimeTitle,
    // Collection
    Collection,
    CollectionId,
    CoverImage,
    DomainError,
    Page,
    PageInfo,
};

// ============================================================================
// PUBLIC API - Errors and configuration
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, CollectionsReloaded, DomainEvent, EventBus, EventLogEntry, SubscriptionId,
    WindowFocused,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use repositories::{
    InMemoryKeyValueRepository, KeyValueRepository, SqliteKeyValueRepository, AUTOINCREMENT_KEY,
    COLLECTIONS_KEY,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    BrowseRequest, CatalogService, CollectionAction, CollectionStore, CollectionSync, IdGenerator,
    SyncGuard,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{AniListClient, AnimeCatalog, PageQuery};
