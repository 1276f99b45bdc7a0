// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// Everything in here is pure: no I/O, no shared state.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalog;
pub mod edit;
pub mod genre;
pub mod movie;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{validate_movie, Movie, YEAR_MAX, YEAR_MIN};

// Genre Tags
pub use genre::{GenreSelector, GenreSet, DEFAULT_GENRES};

// Catalog Query
pub use catalog::{query, CatalogQuery, PageSize, SortKey};

// Edit Dialog
pub use edit::{validate, Draft, EditSession, EditState, FieldError, FieldErrors, FieldName};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
