use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::anime::{Anime, AnimeId};

/// Store-assigned collection identifier, never recycled
pub type CollectionId = i64;

/// A user-named, ordered grouping of anime
///
/// `animes` keeps insertion order and never holds two entries with the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: CollectionId,

    pub name: String,

    #[serde(default)]
    pub animes: Vec<Anime>,

    /// Creation time (unix milliseconds on disk)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Collection {
    /// Create a collection stamped with the current time
    ///
    /// Duplicate anime ids in `animes` are dropped, keeping the first occurrence.
    pub fn new(id: CollectionId, name: String, animes: Vec<Anime>) -> Self {
        Self {
            id,
            name,
            animes: Vec::new(),
            // Millisecond precision, as stored
            created_at: Utc::now().trunc_subsecs(3),
        }
        .with_animes_appended(&animes)
    }

    pub fn contains_anime(&self, anime_id: AnimeId) -> bool {
        self.animes.iter().any(|anime| anime.id == anime_id)
    }

    /// Append every anime not already a member, in the given order
    pub fn with_animes_appended(mut self, animes: &[Anime]) -> Self {
        for anime in animes {
            if !self.contains_anime(anime.id) {
                self.animes.push(anime.clone());
            }
        }
        self
    }

    pub fn without_anime(mut self, anime_id: AnimeId) -> Self {
        self.animes.retain(|anime| anime.id != anime_id);
        self
    }

    pub fn renamed(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Cover of the first member, used as the collection thumbnail
    pub fn cover_image(&self) -> Option<&str> {
        self.animes
            .first()
            .and_then(|anime| anime.cover_image.best())
    }

    pub fn len(&self) -> usize {
        self.animes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animes.is_empty()
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::anime::AnimeTitle;

    fn anime(id: AnimeId) -> Anime {
        Anime::new(id, AnimeTitle::romaji(format!("Anime {}", id)))
    }

    #[test]
    fn test_new_drops_duplicate_members() {
        let collection = Collection::new(1, "Favorites".to_string(), vec![anime(1), anime(2), anime(1)]);
        let ids: Vec<AnimeId> = collection.animes.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_append_keeps_order_and_skips_members() {
        let collection = Collection::new(1, "Favorites".to_string(), vec![anime(3), anime(1)]);
        let collection = collection.with_animes_appended(&[anime(1), anime(2), anime(3), anime(4)]);
        let ids: Vec<AnimeId> = collection.animes.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_without_anime() {
        let collection = Collection::new(1, "Favorites".to_string(), vec![anime(1), anime(2)]);
        let collection = collection.without_anime(1);
        assert!(!collection.contains_anime(1));
        assert_eq!(collection.len(), 1);

        // Removing an absent anime changes nothing
        let collection = collection.without_anime(42);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_created_at_round_trips_as_millis() {
        let collection = Collection::new(7, "Watching".to_string(), vec![]);
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(
            value["createdAt"].as_i64(),
            Some(collection.created_at.timestamp_millis())
        );

        let restored: Collection = serde_json::from_value(value).unwrap();
        assert_eq!(restored, collection);
    }

    #[test]
    fn test_reads_browser_layout() {
        let json = r#"{ "id": 3, "name": "Later", "animes": [], "createdAt": 1672531200000 }"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.id, 3);
        assert_eq!(collection.created_at.timestamp(), 1_672_531_200);
        assert!(collection.is_empty());
    }
}
