//! Collection invariants:
//!
//! 1. Ids are assigned by the store and never reused
//! 2. Names are unique ignoring case (checked before dispatch, not by the store)
//! 3. A collection never holds the same anime twice
//! 4. Member order is the order animes were added
//! 5. Deleting a collection never touches the anime records themselves

pub mod entity;
pub mod invariants;

pub use entity::{Collection, CollectionId};
pub use invariants::{sanitize_collection_name, validate_collection_name, validate_selection};
