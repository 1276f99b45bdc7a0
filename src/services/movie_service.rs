// src/services/movie_service.rs
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::config::CatalogConfig;
use crate::domain::{
    validate_movie, CatalogQuery, DomainError, EditSession, EditState, FieldErrors, Movie,
    SortKey,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, MovieCreated, MovieDeleted, MovieUpdated};
use crate::repositories::MovieRepository;

/// Confirmation shown after a successful save
pub const SAVED_NOTICE: &str = "Movie was saved";

/// Confirmation shown after a listing is removed
pub const REMOVED_NOTICE: &str = "Movie was removed";

/// What the persistence call was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistIntent {
    Create,
    Update,
    Delete,
}

/// Result of pressing Save in the edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Persisted; the session is closed
    Saved {
        movie: Movie,
        intent: PersistIntent,
        notice: &'static str,
    },
    /// Validation failed; nothing was persisted and the session stays open
    Rejected(FieldErrors),
}

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    event_bus: Arc<EventBus>,
    config: CatalogConfig,
}

impl MovieService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        event_bus: Arc<EventBus>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            movie_repo,
            event_bus,
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// First result page for a search term
    /// Without an explicit key the configured default order applies
    pub fn search(&self, term: &str, sort_key: Option<SortKey>) -> AppResult<Vec<Movie>> {
        let query = CatalogQuery {
            term: term.to_string(),
            sort_key: sort_key.or(self.config.default_sort),
            page_size: self.config.page_size,
            page: 0,
        };
        self.run_query(&query)
    }

    /// Run a fully specified query over a fresh snapshot of the catalog
    pub fn run_query(&self, query: &CatalogQuery) -> AppResult<Vec<Movie>> {
        let snapshot = self.movie_repo.list_all()?;
        let page = query.run(&snapshot);
        log::debug!(
            "Query {:?} sorted by {:?}: {} of {} movies",
            query.term,
            query.sort_key,
            page.len(),
            snapshot.len()
        );
        Ok(page)
    }

    pub fn get_movie(&self, movie_id: Uuid) -> AppResult<Option<Movie>> {
        self.movie_repo.get_by_id(movie_id)
    }

    /// Open the edit dialog for an existing movie
    pub fn open_editor(&self, movie_id: Uuid) -> AppResult<EditSession> {
        let movie = self
            .movie_repo
            .get_by_id(movie_id)?
            .ok_or(AppError::NotFound)?;
        Ok(EditSession::for_movie(&movie, self.config.genre_selector()))
    }

    /// Open the dialog for a new listing
    pub fn open_new_editor(&self) -> EditSession {
        EditSession::blank(self.config.genre_selector())
    }

    /// Save trigger: validate, then persist only when the draft is accepted
    pub fn save(&self, session: &mut EditSession) -> AppResult<SaveOutcome> {
        if let EditState::Invalid(errors) = session.attempt_save()? {
            log::info!("Save rejected: {}", errors);
            return Ok(SaveOutcome::Rejected(errors.clone()));
        }
        self.persist_accepted(session)
    }

    /// Persist the session's accepted movie and close the session
    ///
    /// Split from `save` so a failed persistence call can be retried without
    /// re-validating; the session stays Accepted until the store succeeds.
    pub fn persist_accepted(&self, session: &mut EditSession) -> AppResult<SaveOutcome> {
        let movie = session.accepted().cloned().ok_or_else(|| {
            DomainError::InvalidStateTransition(format!(
                "cannot persist a session in state {}",
                session.state().name()
            ))
        })?;

        validate_movie(&movie)?;

        let intent = if self.movie_repo.exists(movie.id)? {
            PersistIntent::Update
        } else {
            PersistIntent::Create
        };

        self.movie_repo.save(&movie).map_err(|e| {
            log::error!("Failed to persist movie {}: {}", movie.id, e);
            e
        })?;

        match intent {
            PersistIntent::Create => self
                .event_bus
                .emit(MovieCreated::new(movie.id, movie.title.clone())),
            _ => self
                .event_bus
                .emit(MovieUpdated::new(movie.id, movie.title.clone())),
        }

        session.take_accepted()?;
        log::info!("Saved {} ({:?})", movie, intent);

        Ok(SaveOutcome::Saved {
            movie,
            intent,
            notice: SAVED_NOTICE,
        })
    }

    /// Remove a listing (after the view's confirmation)
    pub fn delete(&self, movie_id: Uuid) -> AppResult<&'static str> {
        self.movie_repo.delete(movie_id)?;
        self.event_bus.emit(MovieDeleted::new(movie_id));
        log::info!("Removed movie {} ({:?})", movie_id, PersistIntent::Delete);
        Ok(REMOVED_NOTICE)
    }
}
