// src/application/commands/anime_commands.rs
//
// Catalog Command Handlers
//
// Failures come back as an ErrorResponse for a transient notification; the
// collection store is never touched from here.

use crate::application::error_handling::{CommandResult, ErrorResponse};
use crate::application::state::AppState;
use crate::domain::{Anime, AnimeId, Page};
use crate::error::AppError;
use crate::services::BrowseRequest;

/// One page of the catalog, optionally filtered by a search string
pub async fn browse_animes(
    state: &AppState,
    page: Option<u32>,
    per_page: Option<u32>,
    search: Option<String>,
) -> CommandResult<Page<Anime>> {
    let request = BrowseRequest {
        page,
        per_page,
        search,
    };

    Ok(state.catalog_service.browse(request).await?)
}

/// Full record of one anime
pub async fn get_anime(state: &AppState, anime_id: AnimeId) -> CommandResult<Anime> {
    state
        .catalog_service
        .get_anime(anime_id)
        .await
        .map_err(|e| match e {
            AppError::NotFound => ErrorResponse::not_found("Anime"),
            other => other.into(),
        })
}
