// src/application/commands/collection_commands.rs
//
// Collection Command Handlers
//
// RULES:
// - Sanitize and validate names here; the store trusts what it is given
// - Rejected input is reported without dispatching anything
// - Success is reported as a Notification

use crate::application::dto::{CollectAnimesDto, CollectionSummaryDto, Notification};
use crate::application::error_handling::{CommandResult, ErrorResponse};
use crate::application::state::AppState;
use crate::domain::{
    sanitize_collection_name, validate_collection_name, validate_selection, AnimeId, Collection,
    CollectionId, DomainError,
};
use crate::services::CollectionAction;

/// All collections, newest first
pub fn list_collections(state: &AppState) -> Vec<CollectionSummaryDto> {
    state
        .collection_store
        .collections()
        .iter()
        .map(CollectionSummaryDto::from)
        .collect()
}

pub fn get_collection(state: &AppState, collection_id: CollectionId) -> CommandResult<Collection> {
    state
        .collection_store
        .find(collection_id)
        .ok_or_else(|| ErrorResponse::not_found("Collection"))
}

/// Create an empty collection
pub fn create_collection(state: &AppState, name: &str) -> CommandResult<Notification> {
    let name = sanitize_collection_name(name);
    validate_collection_name(&name, &state.collection_store.collections(), None)?;

    state.collection_store.dispatch(CollectionAction::Create {
        name,
        animes: Vec::new(),
    });

    Ok(Notification::success("Collection successfully created"))
}

/// Save a selection of anime into a new collection and/or existing ones
///
/// A clashing new name is reported but does not stop the selected collections
/// from being filled. Fails only when nothing at all was saved.
pub fn collect_animes(state: &AppState, dto: CollectAnimesDto) -> CommandResult<Vec<Notification>> {
    if dto.animes.is_empty() {
        return Err(ErrorResponse::validation("No anime selected".to_string()));
    }

    let new_name = dto
        .new_collection_name
        .as_deref()
        .map(sanitize_collection_name)
        .filter(|name| !name.trim().is_empty());
    validate_selection(new_name.as_deref(), &dto.selected_collection_ids)?;

    let store = &state.collection_store;
    let mut notifications = Vec::new();
    let mut first_error = None;
    let mut saved = false;

    if let Some(name) = new_name {
        match validate_collection_name(&name, &store.collections(), None) {
            Ok(()) => {
                store.dispatch(CollectionAction::Create {
                    name,
                    animes: dto.animes.clone(),
                });
                saved = true;
            }
            Err(e) => {
                let response = ErrorResponse::from(e);
                notifications.push(Notification::error(response.message.clone()));
                first_error = Some(response);
            }
        }
    }

    let targets: Vec<Collection> = dto
        .selected_collection_ids
        .iter()
        .filter_map(|&id| store.find(id))
        .collect();

    if !targets.is_empty() {
        store.dispatch(CollectionAction::AddAnimesToCollections {
            animes: dto.animes,
            target_collections: targets,
        });
        saved = true;
    }

    if !saved {
        return Err(first_error.unwrap_or_else(|| ErrorResponse::not_found("Collection")));
    }

    notifications.push(Notification::success("Animes successfully added"));
    Ok(notifications)
}

pub fn rename_collection(
    state: &AppState,
    collection_id: CollectionId,
    name: &str,
) -> CommandResult<Notification> {
    let collection = get_collection(state, collection_id)?;

    let name = sanitize_collection_name(name);
    validate_collection_name(&name, &state.collection_store.collections(), Some(collection_id))?;

    state.collection_store.dispatch(CollectionAction::Update {
        collection: collection.renamed(name),
    });

    Ok(Notification::success("Collections updated"))
}

pub fn delete_collection(
    state: &AppState,
    collection_id: CollectionId,
) -> CommandResult<Notification> {
    get_collection(state, collection_id)?;

    state
        .collection_store
        .dispatch(CollectionAction::Delete { collection_id });

    Ok(Notification::success("Collections successfully deleted"))
}

pub fn remove_anime_from_collection(
    state: &AppState,
    collection_id: CollectionId,
    anime_id: AnimeId,
) -> CommandResult<Notification> {
    let collection = get_collection(state, collection_id)?;
    if !collection.contains_anime(anime_id) {
        return Err(DomainError::NotFound("Anime".to_string()).into());
    }

    let message = format!("Animes successfully removed from {}", collection.name);
    state.collection_store.dispatch(CollectionAction::Update {
        collection: collection.without_anime(anime_id),
    });

    Ok(Notification::success(message))
}
