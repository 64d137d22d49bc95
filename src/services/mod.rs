// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod collection_store;
pub mod collection_sync;
pub mod id_generator;

pub use catalog_service::{BrowseRequest, CatalogService};

pub use collection_store::{apply, load_collections, CollectionAction, CollectionStore};

pub use collection_sync::{CollectionSync, SyncGuard};

pub use id_generator::IdGenerator;
