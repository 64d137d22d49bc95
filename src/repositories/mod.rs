// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO validation
// - Explicit SQL only

pub mod key_value_repository;

pub use key_value_repository::{
    InMemoryKeyValueRepository, KeyValueRepository, SqliteKeyValueRepository, AUTOINCREMENT_KEY,
    COLLECTIONS_KEY,
};
