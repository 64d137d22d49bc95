// src/services/collection_sync.rs
//
// Cross-window synchronization
//
// Whenever a window regains focus, the store reloads from storage and drops
// its in-memory list. There is no merge: if two windows write between two
// focus changes, the last write wins and the other window's change is lost.

use std::sync::Arc;

use crate::events::{CollectionsReloaded, EventBus, SubscriptionId, WindowFocused};
use crate::services::collection_store::{CollectionAction, CollectionStore};

pub struct CollectionSync;

impl CollectionSync {
    /// Start reloading `store` on every `WindowFocused` event
    ///
    /// The listener lives as long as the returned guard.
    pub fn attach(store: Arc<CollectionStore>, bus: &EventBus) -> SyncGuard {
        let notify = bus.clone();
        let subscription = bus.subscribe::<WindowFocused, _>(move |event| {
            log::debug!("Window {:?} focused, reloading collections", event.window_label);
            store.dispatch(CollectionAction::Load);
            notify.emit(CollectionsReloaded::new(store.len()));
        });

        SyncGuard {
            bus: bus.clone(),
            subscription: Some(subscription),
        }
    }
}

/// Keeps the focus listener registered; dropping it detaches the listener
#[must_use = "the focus listener is removed when the guard is dropped"]
pub struct SyncGuard {
    bus: EventBus,
    subscription: Option<SubscriptionId>,
}

impl SyncGuard {
    /// Detach now instead of on drop
    pub fn detach(mut self) {
        self.release();
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    fn release(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.bus.unsubscribe(id);
            log::debug!("Collection sync detached");
        }
    }
}

impl Drop for SyncGuard {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Collection;
    use crate::repositories::{InMemoryKeyValueRepository, KeyValueRepository, COLLECTIONS_KEY};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn write_collections(storage: &InMemoryKeyValueRepository, collections: &[Collection]) {
        storage
            .set(COLLECTIONS_KEY, &serde_json::to_string(collections).unwrap())
            .unwrap();
    }

    #[test]
    fn test_focus_reloads_from_storage() {
        let storage = Arc::new(InMemoryKeyValueRepository::new());
        let store = Arc::new(CollectionStore::new(storage.clone()));
        let bus = EventBus::new();
        let _guard = CollectionSync::attach(Arc::clone(&store), &bus);

        store.dispatch(CollectionAction::Create {
            name: "Local".to_string(),
            animes: vec![],
        });

        // Another window overwrites storage
        let remote = vec![Collection::new(50, "Remote".to_string(), vec![])];
        write_collections(&storage, &remote);
        assert_ne!(store.collections(), remote);

        bus.emit(WindowFocused::new("main"));
        assert_eq!(store.collections(), remote);
    }

    #[test]
    fn test_reload_is_announced() {
        let storage = Arc::new(InMemoryKeyValueRepository::new());
        let store = Arc::new(CollectionStore::new(storage.clone()));
        let bus = EventBus::new();
        let _guard = CollectionSync::attach(store, &bus);

        let seen = Arc::new(AtomicUsize::new(usize::MAX));
        let seen_clone = Arc::clone(&seen);
        bus.subscribe::<CollectionsReloaded, _>(move |event| {
            seen_clone.store(event.collection_count, Ordering::SeqCst);
        });

        write_collections(
            &storage,
            &[
                Collection::new(1, "A".to_string(), vec![]),
                Collection::new(2, "B".to_string(), vec![]),
            ],
        );
        bus.emit(WindowFocused::new("main"));

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_detaches_listener() {
        let storage = Arc::new(InMemoryKeyValueRepository::new());
        let store = Arc::new(CollectionStore::new(storage.clone()));
        let bus = EventBus::new();

        let guard = CollectionSync::attach(Arc::clone(&store), &bus);
        assert!(guard.is_attached());
        assert_eq!(bus.subscriber_count::<WindowFocused>(), 1);
        drop(guard);
        assert_eq!(bus.subscriber_count::<WindowFocused>(), 0);

        write_collections(&storage, &[Collection::new(9, "Remote".to_string(), vec![])]);
        bus.emit(WindowFocused::new("main"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_explicit_detach() {
        let store = Arc::new(CollectionStore::new(Arc::new(InMemoryKeyValueRepository::new())));
        let bus = EventBus::new();

        CollectionSync::attach(store, &bus).detach();
        assert_eq!(bus.subscriber_count::<WindowFocused>(), 0);
    }
}
