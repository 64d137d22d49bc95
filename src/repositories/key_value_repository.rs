// src/repositories/key_value_repository.rs
//
// Durable string-keyed storage
//
// The store and the id generator only ever see this trait, so the backend
// can be swapped (SQLite on disk, a HashMap in tests).

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use rusqlite::{params, OptionalExtension};

use crate::db::ConnectionPool;
use crate::error::AppResult;

/// Key holding the JSON array of collections
pub const COLLECTIONS_KEY: &str = "collections";

/// Key holding the last issued collection id, as a decimal string
pub const AUTOINCREMENT_KEY: &str = "autoincrement";

pub trait KeyValueRepository: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

pub struct SqliteKeyValueRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueRepository for SqliteKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        let value = conn
            .query_row(
                "SELECT value FROM key_value WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO key_value (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;

        Ok(())
    }
}

/// Process-local storage, lost on exit
#[derive(Debug, Default)]
pub struct InMemoryKeyValueRepository {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueRepository for InMemoryKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool_at, get_connection, initialize_database};

    fn sqlite_repo(dir: &tempfile::TempDir) -> SqliteKeyValueRepository {
        let pool = create_connection_pool_at(&dir.path().join("kv.db"), 2).unwrap();
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        SqliteKeyValueRepository::new(Arc::new(pool))
    }

    #[test]
    fn test_sqlite_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let repo = sqlite_repo(&dir);
        assert_eq!(repo.get(COLLECTIONS_KEY).unwrap(), None);
    }

    #[test]
    fn test_sqlite_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let repo = sqlite_repo(&dir);

        repo.set(AUTOINCREMENT_KEY, "1").unwrap();
        repo.set(AUTOINCREMENT_KEY, "2").unwrap();

        assert_eq!(repo.get(AUTOINCREMENT_KEY).unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_sqlite_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        sqlite_repo(&dir).set(COLLECTIONS_KEY, "[]").unwrap();

        let reopened = sqlite_repo(&dir);
        assert_eq!(reopened.get(COLLECTIONS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_in_memory_get_set() {
        let repo = InMemoryKeyValueRepository::new();
        assert_eq!(repo.get("k").unwrap(), None);

        repo.set("k", "v").unwrap();
        assert_eq!(repo.get("k").unwrap().as_deref(), Some("v"));
    }
}
