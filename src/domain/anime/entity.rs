use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Catalog identifier of an anime (AniList media id)
pub type AnimeId = i64;

/// Metadata record for one media title, as served by the catalog
///
/// Anime values are never mutated locally. Collections embed them verbatim,
/// so the serialized shape doubles as the persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anime {
    pub id: AnimeId,

    pub title: AnimeTitle,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    pub cover_image: CoverImage,

    #[serde(default)]
    pub banner_image: Option<String>,

    /// Average score on a 0-100 scale
    #[serde(default, deserialize_with = "null_as_default")]
    pub mean_score: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub season_year: i32,

    /// Airing season (WINTER, SPRING, SUMMER, FALL)
    #[serde(default, deserialize_with = "null_as_default")]
    pub season: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub episodes: i32,

    /// Last catalog-side modification (unix seconds on the wire)
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimeTitle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub native: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub romaji: String,

    #[serde(default)]
    pub english: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub medium: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub large: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub extra_large: String,
}

impl Anime {
    /// Create a bare record with only identity and title filled in
    pub fn new(id: AnimeId, title: AnimeTitle) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            cover_image: CoverImage::default(),
            banner_image: None,
            mean_score: 0.0,
            season_year: 0,
            season: String::new(),
            genres: Vec::new(),
            episodes: 0,
            // Whole seconds, as stored
            updated_at: Utc::now().trunc_subsecs(0),
        }
    }

    /// Title shown in lists: romaji first, then english, then native
    pub fn display_title(&self) -> &str {
        self.title.display()
    }
}

impl AnimeTitle {
    pub fn romaji(romaji: impl Into<String>) -> Self {
        Self {
            romaji: romaji.into(),
            ..Self::default()
        }
    }

    pub fn display(&self) -> &str {
        if !self.romaji.is_empty() {
            return &self.romaji;
        }
        match self.english.as_deref() {
            Some(english) if !english.is_empty() => english,
            _ => &self.native,
        }
    }
}

impl CoverImage {
    /// Preferred thumbnail: large, then medium, then extra large
    pub fn best(&self) -> Option<&str> {
        [&self.large, &self.medium, &self.extra_large]
            .into_iter()
            .find(|url| !url.is_empty())
            .map(String::as_str)
    }
}

impl std::fmt::Display for Anime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.season_year > 0 {
            write!(f, "{} ({})", self.display_title(), self.season_year)
        } else {
            write!(f, "{}", self.display_title())
        }
    }
}

/// Unreleased titles come back from the catalog with `null` in numeric and
/// text fields; those collapse to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_media() {
        let json = r##"{
            "id": 1,
            "title": { "romaji": "Cowboy Bebop", "english": "Cowboy Bebop", "native": "カウボーイビバップ" },
            "description": "Space bounty hunters.",
            "coverImage": { "color": "#f1785d", "medium": "m.jpg", "large": "l.jpg", "extraLarge": "xl.jpg" },
            "bannerImage": null,
            "meanScore": 86,
            "seasonYear": 1998,
            "season": "SPRING",
            "episodes": 26,
            "genres": ["Action", "Sci-Fi"],
            "updatedAt": 1700000000
        }"##;

        let anime: Anime = serde_json::from_str(json).unwrap();
        assert_eq!(anime.id, 1);
        assert_eq!(anime.title.english.as_deref(), Some("Cowboy Bebop"));
        assert_eq!(anime.cover_image.color, "#f1785d");
        assert_eq!(anime.cover_image.extra_large, "xl.jpg");
        assert!(anime.banner_image.is_none());
        assert_eq!(anime.mean_score, 86.0);
        assert_eq!(anime.genres, vec!["Action", "Sci-Fi"]);
        assert_eq!(anime.updated_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_null_fields_become_defaults() {
        let json = r#"{
            "id": 2,
            "title": { "romaji": "Untitled", "english": null, "native": null },
            "description": null,
            "coverImage": { "color": null, "medium": "m.jpg", "large": "l.jpg", "extraLarge": "xl.jpg" },
            "meanScore": null,
            "seasonYear": null,
            "season": null,
            "episodes": null,
            "genres": [],
            "updatedAt": 0
        }"#;

        let anime: Anime = serde_json::from_str(json).unwrap();
        assert_eq!(anime.episodes, 0);
        assert_eq!(anime.season, "");
        assert_eq!(anime.title.native, "");
        assert_eq!(anime.cover_image.color, "");
    }

    #[test]
    fn test_serializes_catalog_field_names() {
        let anime = Anime::new(5, AnimeTitle::romaji("Mushishi"));
        let value = serde_json::to_value(&anime).unwrap();
        assert!(value.get("coverImage").is_some());
        assert!(value.get("seasonYear").is_some());
        assert!(value["coverImage"].get("extraLarge").is_some());
        assert!(value["updatedAt"].is_i64());
    }

    #[test]
    fn test_display_title_fallbacks() {
        let mut title = AnimeTitle {
            native: "蟲師".to_string(),
            romaji: String::new(),
            english: Some("Mushi-Shi".to_string()),
        };
        assert_eq!(title.display(), "Mushi-Shi");

        title.english = None;
        assert_eq!(title.display(), "蟲師");

        title.romaji = "Mushishi".to_string();
        assert_eq!(title.display(), "Mushishi");
    }

    #[test]
    fn test_best_cover_image() {
        let mut cover = CoverImage {
            medium: "m.jpg".to_string(),
            extra_large: "xl.jpg".to_string(),
            ..CoverImage::default()
        };
        assert_eq!(cover.best(), Some("m.jpg"));

        cover.large = "l.jpg".to_string();
        assert_eq!(cover.best(), Some("l.jpg"));

        assert_eq!(CoverImage::default().best(), None);
    }
}
