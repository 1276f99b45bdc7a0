// src/events/mod.rs
//
// Catalog events - Public API
//
// The handler type is internal to the bus and is not exported

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventLogEntry, EVENT_LOG_CAPACITY};
pub use types::{DomainEvent, EventMeta, MovieCreated, MovieDeleted, MovieUpdated};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
