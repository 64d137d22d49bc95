// src/integrations/catalog.rs
//
// Boundary toward the anime catalog. Collections only ever receive the
// `Anime` values this returns; nothing here touches local state.

use async_trait::async_trait;

use crate::domain::{Anime, AnimeId, Page};
use crate::error::AppResult;

/// Parameters of a paged catalog query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
    /// Restrict the page to a single media id
    pub id: Option<AnimeId>,
    /// Free-text title search
    pub search: Option<String>,
}

impl PageQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            id: None,
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_id(mut self, id: AnimeId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimeCatalog: Send + Sync {
    /// Fetch one anime by id
    async fn get_anime(&self, anime_id: AnimeId) -> AppResult<Anime>;

    /// Fetch one page of anime, optionally filtered
    async fn get_animes(&self, query: PageQuery) -> AppResult<Page<Anime>>;
}
