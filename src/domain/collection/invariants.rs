use std::sync::LazyLock;

use regex::Regex;

use super::entity::{Collection, CollectionId};
use crate::domain::{DomainError, DomainResult};

/// Anything that is not an ASCII word character or whitespace
static DISALLOWED_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("static pattern"));

/// Strip characters that are not allowed in a collection name
///
/// Only ASCII word characters and whitespace survive, matching what the name
/// input accepts while typing.
pub fn sanitize_collection_name(raw: &str) -> String {
    DISALLOWED_NAME_CHARS.replace_all(raw, "").into_owned()
}

/// Validates a collection name against the existing collections
///
/// Names must be non-blank and unique ignoring case. `exclude_id` is the
/// collection being renamed, which may keep its own name.
pub fn validate_collection_name(
    name: &str,
    existing: &[Collection],
    exclude_id: Option<CollectionId>,
) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Collection name cannot be empty".to_string(),
        ));
    }

    let lowered = name.to_lowercase();
    let clash = existing
        .iter()
        .filter(|collection| Some(collection.id) != exclude_id)
        .any(|collection| collection.name.to_lowercase() == lowered);

    if clash {
        return Err(DomainError::DuplicateName(name.to_string()));
    }
    Ok(())
}

/// Saving animes needs a new collection name or at least one target
pub fn validate_selection(new_name: Option<&str>, selected: &[CollectionId]) -> DomainResult<()> {
    let has_name = new_name.is_some_and(|name| !name.trim().is_empty());
    if !has_name && selected.is_empty() {
        return Err(DomainError::EmptySelection);
    }
    Ok(())
}
