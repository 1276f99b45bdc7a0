// src/lib.rs
// MovieList - Local movie catalog
//
// Architecture:
// - Domain-centric: query, validation and tag rules live in the domain
// - Event-driven: writes are announced on the event bus
// - Explicit: No implicit behavior, no magic
// - Application Layer: view boundary (DTOs and commands)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    query,
    validate,
    validate_movie,
    // Catalog Query
    CatalogQuery,
    // Edit Dialog
    Draft,
    EditSession,
    EditState,
    FieldError,
    FieldErrors,
    FieldName,
    // Genre Tags
    GenreSelector,
    GenreSet,
    // Movie
    Movie,
    PageSize,
    SortKey,
    DEFAULT_GENRES,
    YEAR_MAX,
    YEAR_MIN,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use domain::{DomainError, DomainResult};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::CatalogConfig;

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    DomainEvent,
    EventBus,
    EventLogEntry,
    EventMeta,
    MovieCreated,
    MovieDeleted,
    MovieUpdated,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{MovieRepository, SqliteMovieRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{MovieService, PersistIntent, SaveOutcome, REMOVED_NOTICE, SAVED_NOTICE};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ListRefresh};

// Re-export application submodules
pub use application::commands;
pub use application::dto;
