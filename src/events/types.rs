// events/types.rs
//
// Catalog events: facts about writes that already happened.
// Each carries the movie it concerns and nothing the listener
// could not re-read from the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and timestamp shared by every event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeta {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl EventMeta {
    pub fn now() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

/// Implemented by every event the bus can carry
pub trait DomainEvent: std::fmt::Debug + Clone + Send + Sync {
    /// Name recorded in the emission log
    const EVENT_TYPE: &'static str;

    fn meta(&self) -> &EventMeta;

    /// Movie the write touched
    fn movie_id(&self) -> Uuid;
}

/// A new listing was persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCreated {
    #[serde(flatten)]
    pub meta: EventMeta,
    pub movie_id: Uuid,
    pub title: String,
}

/// An existing listing was saved from the edit dialog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieUpdated {
    #[serde(flatten)]
    pub meta: EventMeta,
    pub movie_id: Uuid,
    pub title: String,
}

/// A listing was removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDeleted {
    #[serde(flatten)]
    pub meta: EventMeta,
    pub movie_id: Uuid,
}

impl MovieCreated {
    pub fn new(movie_id: Uuid, title: String) -> Self {
        Self {
            meta: EventMeta::now(),
            movie_id,
            title,
        }
    }
}

impl MovieUpdated {
    pub fn new(movie_id: Uuid, title: String) -> Self {
        Self {
            meta: EventMeta::now(),
            movie_id,
            title,
        }
    }
}

impl MovieDeleted {
    pub fn new(movie_id: Uuid) -> Self {
        Self {
            meta: EventMeta::now(),
            movie_id,
        }
    }
}

impl DomainEvent for MovieCreated {
    const EVENT_TYPE: &'static str = "MovieCreated";

    fn meta(&self) -> &EventMeta {
        &self.meta
    }

    fn movie_id(&self) -> Uuid {
        self.movie_id
    }
}

impl DomainEvent for MovieUpdated {
    const EVENT_TYPE: &'static str = "MovieUpdated";

    fn meta(&self) -> &EventMeta {
        &self.meta
    }

    fn movie_id(&self) -> Uuid {
        self.movie_id
    }
}

impl DomainEvent for MovieDeleted {
    const EVENT_TYPE: &'static str = "MovieDeleted";

    fn meta(&self) -> &EventMeta {
        &self.meta
    }

    fn movie_id(&self) -> Uuid {
        self.movie_id
    }
}
