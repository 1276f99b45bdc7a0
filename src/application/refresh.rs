// src/application/refresh.rs
//
// List refresh tracking
//
// Every catalog write moves the revision forward. The list view remembers
// the revision its results were rendered at and re-runs its search once
// that revision is stale (after the edit dialog saves or a listing is removed).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use uuid::Uuid;

use crate::events::{DomainEvent, EventBus, MovieCreated, MovieDeleted, MovieUpdated};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Edited,
    Removed,
}

/// The most recent write seen by the tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogChange {
    pub revision: u64,
    pub movie_id: Uuid,
    pub kind: ChangeKind,
}

#[derive(Debug, Default)]
pub struct ListRefresh {
    revision: AtomicU64,
    last_change: Mutex<Option<CatalogChange>>,
}

impl ListRefresh {
    /// Track the catalog writes announced on `bus`
    pub fn attach(bus: &EventBus) -> Arc<Self> {
        let refresh = Arc::new(Self::default());
        refresh.listen::<MovieCreated>(bus, ChangeKind::Added);
        refresh.listen::<MovieUpdated>(bus, ChangeKind::Edited);
        refresh.listen::<MovieDeleted>(bus, ChangeKind::Removed);
        refresh
    }

    fn listen<E: DomainEvent + 'static>(self: &Arc<Self>, bus: &EventBus, kind: ChangeKind) {
        let refresh = Arc::clone(self);
        bus.subscribe::<E, _>(move |event| refresh.record(event.movie_id(), kind));
    }

    fn record(&self, movie_id: Uuid, kind: ChangeKind) {
        let mut last = self
            .last_change
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        *last = Some(CatalogChange {
            revision,
            movie_id,
            kind,
        });
        log::debug!("Catalog revision {}: {:?} {}", revision, kind, movie_id);
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    pub fn last_change(&self) -> Option<CatalogChange> {
        self.last_change
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a list rendered at `seen` needs its search re-run
    pub fn is_stale(&self, seen: u64) -> bool {
        self.revision() != seen
    }
}
