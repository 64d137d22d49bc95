// src/services/collection_store.rs
//
// Collection Store
//
// RULES:
// - Every mutation goes through `dispatch`
// - Every mutation that changes the list is written to storage before
//   `dispatch` returns
// - The store never validates names or selections; callers do that first
// - Storage failures are logged and swallowed, never returned

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::{Anime, Collection, CollectionId};
use crate::error::AppError;
use crate::repositories::{KeyValueRepository, COLLECTIONS_KEY};
use crate::services::id_generator::IdGenerator;

/// Everything that can happen to the collection list
#[derive(Debug, Clone)]
pub enum CollectionAction {
    /// Replace the in-memory list with what storage currently holds
    Load,

    /// Prepend a new collection. The name must already be unique.
    Create { name: String, animes: Vec<Anime> },

    Delete { collection_id: CollectionId },

    /// Replace the collection with the same id, keeping its position
    Update { collection: Collection },

    /// Append missing animes to each target that exists in the list
    AddAnimesToCollections {
        animes: Vec<Anime>,
        target_collections: Vec<Collection>,
    },
}

impl CollectionAction {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Load => "LOAD",
            Self::Create { .. } => "CREATE",
            Self::Delete { .. } => "DELETE",
            Self::Update { .. } => "UPDATE",
            Self::AddAnimesToCollections { .. } => "ADD_ANIMES_TO_COLLECTIONS",
        }
    }
}

/// Read the persisted list; missing or corrupt data yields an empty list
pub fn load_collections(storage: &dyn KeyValueRepository) -> Vec<Collection> {
    match storage.get(COLLECTIONS_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Discarding unreadable collections: {}", e);
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("Could not read collections: {}", e);
            Vec::new()
        }
    }
}

fn persist_collections(storage: &dyn KeyValueRepository, collections: &[Collection]) {
    let result = serde_json::to_string(collections)
        .map_err(AppError::from)
        .and_then(|json| storage.set(COLLECTIONS_KEY, &json));

    if let Err(e) = result {
        log::error!("Failed to persist {} collections: {}", collections.len(), e);
    }
}

/// Reducer over the collection list
///
/// `Load` reads from storage. Every other action computes the next list and,
/// if it differs from `state`, writes it to storage before returning.
pub fn apply(
    state: &[Collection],
    action: CollectionAction,
    storage: &dyn KeyValueRepository,
    ids: &IdGenerator,
) -> Vec<Collection> {
    let next = match action {
        CollectionAction::Load => return load_collections(storage),

        CollectionAction::Create { name, animes } => {
            let created = Collection::new(ids.next(), name, animes);
            log::info!("Created collection {} ({})", created.id, created.name);

            let mut next = Vec::with_capacity(state.len() + 1);
            next.push(created);
            next.extend_from_slice(state);
            next
        }

        CollectionAction::Delete { collection_id } => state
            .iter()
            .filter(|collection| collection.id != collection_id)
            .cloned()
            .collect(),

        CollectionAction::Update { collection } => state
            .iter()
            .map(|old| {
                if old.id == collection.id {
                    collection.clone()
                } else {
                    old.clone()
                }
            })
            .collect(),

        CollectionAction::AddAnimesToCollections {
            animes,
            target_collections,
        } => state
            .iter()
            .map(|current| {
                let targeted = target_collections
                    .iter()
                    .any(|target| target.id == current.id);
                if targeted {
                    current.clone().with_animes_appended(&animes)
                } else {
                    current.clone()
                }
            })
            .collect(),
    };

    if next.as_slice() != state {
        persist_collections(storage, &next);
    }
    next
}

/// Owner of the live collection list
///
/// Holds the list behind a lock so the focus listener and the caller can share
/// one store. Dispatches are applied one at a time in call order.
pub struct CollectionStore {
    storage: Arc<dyn KeyValueRepository>,
    ids: IdGenerator,
    state: RwLock<Vec<Collection>>,
}

impl CollectionStore {
    /// Create a store and load whatever storage currently holds
    pub fn new(storage: Arc<dyn KeyValueRepository>) -> Self {
        let initial = load_collections(storage.as_ref());
        log::debug!("Loaded {} collections", initial.len());

        Self {
            ids: IdGenerator::new(Arc::clone(&storage)),
            storage,
            state: RwLock::new(initial),
        }
    }

    pub fn dispatch(&self, action: CollectionAction) {
        let kind = action.kind();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        let next = apply(&state, action, self.storage.as_ref(), &self.ids);
        log::debug!("{}: {} -> {} collections", kind, state.len(), next.len());

        *state = next;
    }

    /// Snapshot of the current list, newest first
    pub fn collections(&self) -> Vec<Collection> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn find(&self, collection_id: CollectionId) -> Option<Collection> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|collection| collection.id == collection_id)
            .cloned()
    }

    /// Find by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<Collection> {
        let lowered = name.to_lowercase();
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|collection| collection.name.to_lowercase() == lowered)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
