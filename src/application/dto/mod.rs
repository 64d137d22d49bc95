// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain values only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Anime, Collection, CollectionId};

// ============================================================================
// COLLECTION DTOs
// ============================================================================

/// One row of the collection list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummaryDto {
    pub id: CollectionId,
    pub name: String,
    pub anime_count: usize,
    pub cover_image: Option<String>,
    pub created_at: String,
}

impl From<&Collection> for CollectionSummaryDto {
    fn from(collection: &Collection) -> Self {
        Self {
            id: collection.id,
            name: collection.name.clone(),
            anime_count: collection.len(),
            cover_image: collection.cover_image().map(str::to_string),
            created_at: collection.created_at.to_rfc3339(),
        }
    }
}

/// Save a selection of anime into existing and/or new collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectAnimesDto {
    pub animes: Vec<Anime>,
    #[serde(default)]
    pub selected_collection_ids: Vec<CollectionId>,
    #[serde(default)]
    pub new_collection_name: Option<String>,
}

// ============================================================================
// NOTIFICATIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Short message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
