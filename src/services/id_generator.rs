// src/services/id_generator.rs
//
// Monotonic collection ids, persisted next to the collections.
//
// The read-increment-write sequence is serialized inside this process only.
// Two processes sharing the same storage can still read the same counter and
// issue the same id; nothing stronger than the storage's own write ordering
// protects against that.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::CollectionId;
use crate::repositories::{KeyValueRepository, AUTOINCREMENT_KEY};

pub struct IdGenerator {
    storage: Arc<dyn KeyValueRepository>,
    /// Last id handed out by this instance
    last_issued: Mutex<CollectionId>,
}

impl IdGenerator {
    pub fn new(storage: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            storage,
            last_issued: Mutex::new(0),
        }
    }

    /// Issue the next id
    ///
    /// Never fails: an unreadable or corrupt counter counts as zero, and a
    /// failed write is logged. Ids stay strictly increasing for the lifetime of
    /// this generator either way, up to `CollectionId::MAX`.
    ///
    /// A stored counter with no successor is treated like a corrupt one: the
    /// sequence continues from the last id issued here, or restarts at 1 when
    /// that is exhausted too.
    pub fn next(&self) -> CollectionId {
        let mut last_issued = self.last_issued.lock().unwrap_or_else(PoisonError::into_inner);

        let stored = self.read_counter();
        let next = match stored.max(*last_issued).checked_add(1) {
            Some(next) => next,
            None => {
                log::warn!(
                    "Id counter {} has no successor, continuing from {}",
                    stored,
                    *last_issued
                );
                last_issued.checked_add(1).unwrap_or(1)
            }
        };

        if let Err(e) = self.storage.set(AUTOINCREMENT_KEY, &next.to_string()) {
            log::error!("Failed to persist id counter {}: {}", next, e);
        }

        *last_issued = next;
        next
    }

    /// Counter as currently stored, 0 when missing or unreadable
    pub fn current(&self) -> CollectionId {
        self.read_counter()
    }

    fn read_counter(&self) -> CollectionId {
        match self.storage.get(AUTOINCREMENT_KEY) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Corrupt id counter {:?}, restarting from 0", raw);
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("Could not read id counter: {}", e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use crate::repositories::InMemoryKeyValueRepository;

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl KeyValueRepository for ReadOnlyStorage {
        fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Ok(Some("41".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Other("read-only".to_string()))
        }
    }

    #[test]
    fn test_starts_at_one() {
        let generator = IdGenerator::new(Arc::new(InMemoryKeyValueRepository::new()));
        assert_eq!(generator.next(), 1);
        assert_eq!(generator.next(), 2);
    }

    #[test]
    fn test_counter_is_persisted() {
        let storage = Arc::new(InMemoryKeyValueRepository::new());
        let generator = IdGenerator::new(storage.clone());
        generator.next();
        generator.next();

        assert_eq!(storage.get(AUTOINCREMENT_KEY).unwrap().as_deref(), Some("2"));

        // A fresh generator over the same storage continues the sequence
        let resumed = IdGenerator::new(storage);
        assert_eq!(resumed.next(), 3);
    }

    #[test]
    fn test_corrupt_counter_counts_as_zero() {
        let storage = Arc::new(InMemoryKeyValueRepository::new());
        storage.set(AUTOINCREMENT_KEY, "not a number").unwrap();

        let generator = IdGenerator::new(storage);
        assert_eq!(generator.current(), 0);
        assert_eq!(generator.next(), 1);
    }

    #[test]
    fn test_strictly_increasing_when_writes_fail() {
        let generator = IdGenerator::new(Arc::new(ReadOnlyStorage));
        let ids: Vec<CollectionId> = (0..5).map(|_| generator.next()).collect();
        assert_eq!(ids, vec![42, 43, 44, 45, 46]);
    }

    #[test]
    fn test_counter_rolled_back_by_other_writer() {
        let storage = Arc::new(InMemoryKeyValueRepository::new());
        let generator = IdGenerator::new(storage.clone());
        assert_eq!(generator.next(), 1);
        assert_eq!(generator.next(), 2);

        storage.set(AUTOINCREMENT_KEY, "0").unwrap();
        assert_eq!(generator.next(), 3);
    }

    #[test]
    fn test_exhausted_counter_does_not_overflow() {
        let storage = Arc::new(InMemoryKeyValueRepository::new());
        storage
            .set(AUTOINCREMENT_KEY, &CollectionId::MAX.to_string())
            .unwrap();

        let generator = IdGenerator::new(storage.clone());
        assert_eq!(generator.next(), 1);
        assert_eq!(storage.get(AUTOINCREMENT_KEY).unwrap().as_deref(), Some("1"));
        assert_eq!(generator.next(), 2);
    }

    #[test]
    fn test_exhausted_after_last_id() {
        let storage = Arc::new(InMemoryKeyValueRepository::new());
        storage
            .set(AUTOINCREMENT_KEY, &(CollectionId::MAX - 1).to_string())
            .unwrap();

        let generator = IdGenerator::new(storage);
        assert_eq!(generator.next(), CollectionId::MAX);
        assert_eq!(generator.next(), 1);
    }

    #[test]
    fn test_concurrent_calls_never_repeat() {
        let generator = Arc::new(IdGenerator::new(Arc::new(InMemoryKeyValueRepository::new())));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || (0..25).map(|_| generator.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<CollectionId> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 100);
        assert_eq!(all.last(), Some(&100));
    }
}
