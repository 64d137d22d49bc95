// src/domain/mod.rs
//
// Domain root: value types and boundary validation.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod anime;
pub mod collection;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use anime::{Anime, AnimeId, AnimeTitle, CoverImage, Page, PageInfo};

pub use collection::{
    sanitize_collection_name, validate_collection_name, validate_selection, Collection,
    CollectionId,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These are rejected user actions, reported before anything is dispatched
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Collection name must be unique: {0}")]
    DuplicateName(String),

    #[error("Select a collection or enter a new collection name")]
    EmptySelection,

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
