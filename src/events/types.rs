// src/events/types.rs
//
// Domain events.
// Each event is an immutable fact that has already occurred.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// WINDOW EVENTS
// ============================================================================

/// Emitted when a window of the application becomes the active one again
///
/// Other windows may have written to storage while this one was in the
/// background.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowFocused {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub window_label: String,
}

impl WindowFocused {
    pub fn new(window_label: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            window_label: window_label.into(),
        }
    }
}

impl DomainEvent for WindowFocused {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "WindowFocused" }
}

// ============================================================================
// COLLECTION EVENTS
// ============================================================================

/// Emitted after the collection list was replaced from storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionsReloaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub collection_count: usize,
}

impl CollectionsReloaded {
    pub fn new(collection_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            collection_count,
        }
    }
}

impl DomainEvent for CollectionsReloaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CollectionsReloaded" }
}
