// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and is not exported

pub mod bus;
pub mod types;

pub use types::{CollectionsReloaded, DomainEvent, WindowFocused};

pub use bus::{EventBus, EventLogEntry, SubscriptionId, EVENT_LOG_CAPACITY};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
