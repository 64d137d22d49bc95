// src/config/mod.rs
//
// Runtime configuration
//
// Values come from environment variables, falling back to defaults rooted
// in the platform data directory. Everything is validated once at load time.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const ENV_DATA_DIR: &str = "WIKINIME_DATA_DIR";
pub const ENV_CATALOG_URL: &str = "WIKINIME_CATALOG_URL";
pub const ENV_CATALOG_TOKEN: &str = "WIKINIME_CATALOG_TOKEN";
pub const ENV_PER_PAGE: &str = "WIKINIME_PER_PAGE";
pub const ENV_POOL_SIZE: &str = "WIKINIME_POOL_SIZE";

pub const DEFAULT_CATALOG_URL: &str = "https://graphql.anilist.co";
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 50;
const DEFAULT_POOL_SIZE: u32 = 4;
const DATABASE_FILE: &str = "wikinime.db";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the key-value database
    pub data_dir: PathBuf,

    /// GraphQL endpoint of the anime catalog
    pub catalog_url: String,

    /// Optional bearer token sent to the catalog
    pub catalog_token: Option<String>,

    pub catalog_timeout: Duration,

    /// Minimum spacing between two catalog requests
    pub catalog_min_interval: Duration,

    pub default_per_page: u32,

    pub pool_size: u32,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(ENV_DATA_DIR) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };

        let catalog_url = lookup(ENV_CATALOG_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        let catalog_token = lookup(ENV_CATALOG_TOKEN).filter(|token| !token.trim().is_empty());

        let default_per_page = parse_number(&lookup, ENV_PER_PAGE, DEFAULT_PER_PAGE)?;
        let pool_size = parse_number(&lookup, ENV_POOL_SIZE, DEFAULT_POOL_SIZE)?;

        let config = Self {
            data_dir,
            catalog_url,
            catalog_token,
            catalog_timeout: Duration::from_secs(30),
            catalog_min_interval: Duration::from_millis(1000),
            default_per_page,
            pool_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration for a given data directory with every other value defaulted
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_token: None,
            catalog_timeout: Duration::from_secs(30),
            catalog_min_interval: Duration::from_millis(1000),
            default_per_page: DEFAULT_PER_PAGE,
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    fn validate(&self) -> AppResult<()> {
        if !self.catalog_url.starts_with("http://") && !self.catalog_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "{} must be an http(s) URL, got {:?}",
                ENV_CATALOG_URL, self.catalog_url
            )));
        }
        if self.default_per_page == 0 || self.default_per_page > MAX_PER_PAGE {
            return Err(AppError::Config(format!(
                "{} must be between 1 and {}",
                ENV_PER_PAGE, MAX_PER_PAGE
            )));
        }
        if self.pool_size == 0 {
            return Err(AppError::Config(format!("{} must be positive", ENV_POOL_SIZE)));
        }
        Ok(())
    }

    /// Database file path; creates the data directory if needed
    pub fn database_path(&self) -> AppResult<PathBuf> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(self.data_dir.join(DATABASE_FILE))
    }
}

fn default_data_dir() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;
    Ok(app_data_dir.join("wikinime"))
}

fn parse_number<F>(lookup: &F, key: &str, default: u32) -> AppResult<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} is not a number: {:?}", key, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/tmp/wikinime-test"),
            (ENV_CATALOG_URL, "http://localhost:4000/graphql"),
            (ENV_CATALOG_TOKEN, "secret"),
            (ENV_PER_PAGE, "25"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/wikinime-test"));
        assert_eq!(config.catalog_url, "http://localhost:4000/graphql");
        assert_eq!(config.catalog_token.as_deref(), Some("secret"));
        assert_eq!(config.default_per_page, 25);
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_DATA_DIR, "/tmp/x")])).unwrap();
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert!(config.catalog_token.is_none());
        assert_eq!(config.default_per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad_number = AppConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/tmp/x"),
            (ENV_PER_PAGE, "ten"),
        ]));
        assert!(matches!(bad_number, Err(AppError::Config(_))));

        let too_many = AppConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/tmp/x"),
            (ENV_PER_PAGE, "500"),
        ]));
        assert!(too_many.is_err());

        let bad_url = AppConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/tmp/x"),
            (ENV_CATALOG_URL, "ftp://example.org"),
        ]));
        assert!(bad_url.is_err());
    }

    #[test]
    fn test_database_path_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::with_data_dir(dir.path().join("nested"));
        let path = config.database_path().unwrap();
        assert!(path.ends_with("nested/wikinime.db"));
        assert!(dir.path().join("nested").is_dir());
    }
}
