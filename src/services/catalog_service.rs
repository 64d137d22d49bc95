// src/services/catalog_service.rs
//
// Paging rules in front of the catalog. Results are handed to callers as-is;
// catalog failures never touch the collection store.

use std::sync::Arc;

use crate::config::MAX_PER_PAGE;
use crate::domain::{Anime, AnimeId, DomainError, Page};
use crate::error::{AppError, AppResult};
use crate::integrations::{AnimeCatalog, PageQuery};

#[derive(Debug, Clone, Default)]
pub struct BrowseRequest {
    /// 1-based, defaults to the first page
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

pub struct CatalogService {
    catalog: Arc<dyn AnimeCatalog>,
    default_per_page: u32,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn AnimeCatalog>, default_per_page: u32) -> Self {
        Self {
            catalog,
            default_per_page,
        }
    }

    pub async fn browse(&self, request: BrowseRequest) -> AppResult<Page<Anime>> {
        let query = self.page_query(request)?;
        self.catalog.get_animes(query).await.inspect_err(|e| {
            log::warn!("Catalog page request failed: {}", e);
        })
    }

    pub async fn get_anime(&self, anime_id: AnimeId) -> AppResult<Anime> {
        self.catalog.get_anime(anime_id).await.inspect_err(|e| {
            log::warn!("Catalog lookup of anime {} failed: {}", anime_id, e);
        })
    }

    /// Fetch several anime by id, in the given order
    ///
    /// Used when saving a selection whose full records are not at hand.
    pub async fn get_animes_by_id(&self, anime_ids: &[AnimeId]) -> AppResult<Vec<Anime>> {
        let mut animes = Vec::with_capacity(anime_ids.len());
        for &anime_id in anime_ids {
            animes.push(self.get_anime(anime_id).await?);
        }
        Ok(animes)
    }

    fn page_query(&self, request: BrowseRequest) -> AppResult<PageQuery> {
        let page = request.page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::Domain(DomainError::InvariantViolation(
                "Page numbers start at 1".to_string(),
            )));
        }

        let per_page = request.per_page.unwrap_or(self.default_per_page);
        if per_page == 0 {
            return Err(AppError::Domain(DomainError::InvariantViolation(
                "Page size must be positive".to_string(),
            )));
        }

        let mut query = PageQuery::new(page, per_page.min(MAX_PER_PAGE));
        if let Some(search) = request.search.filter(|s| !s.trim().is_empty()) {
            query = query.with_search(search.trim());
        }
        Ok(query)
    }
}
