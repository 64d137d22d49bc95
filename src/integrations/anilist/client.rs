// src/integrations/anilist/client.rs
//
// AniList API Integration
//
// ARCHITECTURE:
// - GraphQL client for the AniList API
// - Handles authentication and rate limiting
// - Returns `domain::Anime` value objects verbatim
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never reads or writes collections
// - Handles all external API concerns

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::queries::{GET_ANIMES_QUERY, GET_ANIME_QUERY};
use crate::config::AppConfig;
use crate::domain::{Anime, AnimeId, Page};
use crate::error::{AppError, AppResult};
use crate::integrations::catalog::{AnimeCatalog, PageQuery};

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
    status: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct PageData {
    #[serde(rename = "Page")]
    page: Page<Anime>,
}

#[derive(Debug, Deserialize)]
struct MediaData {
    #[serde(rename = "Media")]
    media: Option<Anime>,
}

/// Spaces requests at least `min_interval` apart
struct RateLimiter {
    last_request: Option<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: None,
            min_interval,
        }
    }

    async fn wait_if_needed(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}

/// AniList API Client
pub struct AniListClient {
    base_url: String,
    http_client: Client,
    rate_limiter: Mutex<RateLimiter>,
    auth_token: Option<String>,
}

impl AniListClient {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.catalog_timeout)
            .build()
            .map_err(|e| AppError::Catalog(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.catalog_url.clone(),
            http_client,
            rate_limiter: Mutex::new(RateLimiter::new(config.catalog_min_interval)),
            auth_token: config.catalog_token.clone(),
        })
    }

    /// Same client, authenticated with a bearer token
    pub fn with_auth(mut self, token: String) -> Self {
        self.auth_token = Some(token);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // INTERNAL: GraphQL Execution
    // ========================================================================

    async fn execute_query<T>(&self, query: &str, variables: Value) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.rate_limiter.lock().await.wait_if_needed().await;

        let body = json!({
            "query": query,
            "variables": variables
        });

        let mut request = self
            .http_client
            .post(&self.base_url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &self.auth_token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Catalog(format!("AniList request failed: {}", e)))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| AppError::Catalog(format!("Failed to read AniList response: {}", e)))?;

        // AniList reports query errors with a 4xx status and an `errors` body,
        // so the body is inspected before the status.
        let data = parse_response(payload);
        if data.is_ok() && !status.is_success() {
            return Err(AppError::Catalog(format!(
                "AniList returned status: {}",
                status
            )));
        }
        data
    }
}

#[async_trait]
impl AnimeCatalog for AniListClient {
    async fn get_anime(&self, anime_id: AnimeId) -> AppResult<Anime> {
        log::debug!("Fetching anime {}", anime_id);

        let data: MediaData = self
            .execute_query(GET_ANIME_QUERY, json!({ "id": anime_id }))
            .await?;

        data.media.ok_or(AppError::NotFound)
    }

    async fn get_animes(&self, query: PageQuery) -> AppResult<Page<Anime>> {
        log::debug!("Fetching anime page {:?}", query);

        let data: PageData = self
            .execute_query(GET_ANIMES_QUERY, page_variables(&query))
            .await?;

        Ok(data.page)
    }
}

/// Query variables; absent filters are left out entirely
fn page_variables(query: &PageQuery) -> Value {
    let mut variables = Map::new();
    variables.insert("page".to_string(), json!(query.page));
    variables.insert("perPage".to_string(), json!(query.per_page));
    if let Some(id) = query.id {
        variables.insert("id".to_string(), json!(id));
    }
    if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
        variables.insert("search".to_string(), json!(search));
    }
    Value::Object(variables)
}

/// Unwrap a GraphQL envelope into its data, turning `errors` into an error
fn parse_response<T>(payload: Value) -> AppResult<T>
where
    T: DeserializeOwned,
{
    let response: GraphQLResponse<T> = serde_json::from_value(payload)
        .map_err(|e| AppError::Catalog(format!("Failed to parse AniList response: {}", e)))?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        if errors.iter().all(|e| e.status == Some(404)) {
            return Err(AppError::NotFound);
        }

        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(AppError::Catalog(format!(
            "AniList errors: {}",
            messages.join(", ")
        )));
    }

    response
        .data
        .ok_or_else(|| AppError::Catalog("AniList returned no data".to_string()))
}
