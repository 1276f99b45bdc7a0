// events/bus/event_bus.rs
//
// Synchronous, type-keyed event bus.
//
// - Handlers run on the emitting thread, in subscription order
// - No lock is held while a handler runs, so handlers may subscribe or emit
// - The emission log keeps only the most recent EVENT_LOG_CAPACITY entries

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::events::types::DomainEvent;

/// Entries kept in the emission log
pub const EVENT_LOG_CAPACITY: usize = 256;

type Handler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// One emitted event, as recorded for tracing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLogEntry {
    pub event_type: &'static str,
    pub event_id: Uuid,
    pub movie_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub handler_count: usize,
}

#[derive(Default)]
struct BusInner {
    handlers: RwLock<HashMap<TypeId, Vec<Handler>>>,
    recent: Mutex<VecDeque<EventLogEntry>>,
}

/// Services announce catalog writes here; listeners such as the list refresh
/// tracker subscribe by event type. Clones share handlers and log.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<BusInner>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for events of type `E`
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: Handler = Arc::new(move |event: &dyn Any| match event.downcast_ref::<E>() {
            Some(event) => handler(event),
            None => log::error!("Handler for {} received a foreign event", E::EVENT_TYPE),
        });

        self.inner
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(wrapped);
    }

    /// Record the event and run its handlers
    ///
    /// The handler list is snapshotted first: handlers subscribed during
    /// this emission see the next event, not this one. A panicking handler
    /// is logged and the remaining handlers still run.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let handlers: Vec<Handler> = self
            .inner
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .cloned()
            .unwrap_or_default();

        let meta = event.meta();
        self.record(EventLogEntry {
            event_type: E::EVENT_TYPE,
            event_id: meta.event_id,
            movie_id: event.movie_id(),
            occurred_at: meta.occurred_at,
            handler_count: handlers.len(),
        });
        log::debug!(
            "[EVENT] {} for movie {} | {} handlers",
            E::EVENT_TYPE,
            event.movie_id(),
            handlers.len()
        );

        for (idx, handler) in handlers.iter().enumerate() {
            let outcome = catch_unwind(AssertUnwindSafe(|| (**handler)(&event as &dyn Any)));
            if let Err(panic) = outcome {
                log::error!("Handler {} for {} panicked: {:?}", idx, E::EVENT_TYPE, panic);
            }
        }
    }

    fn record(&self, entry: EventLogEntry) {
        let mut recent = self
            .inner
            .recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if recent.len() == EVENT_LOG_CAPACITY {
            recent.pop_front();
        }
        recent.push_back(entry);
    }

    /// Most recent emissions, oldest first
    pub fn recent_events(&self) -> Vec<EventLogEntry> {
        self.inner
            .recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear_event_log(&self) {
        self.inner
            .recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn subscriber_count<E: 'static>(&self) -> usize {
        self.inner
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}
