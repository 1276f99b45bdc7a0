// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are view-friendly representations
// - DTOs are simple, serializable structs
// - Drafts come IN as raw text; validation happens in the domain

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::refresh::CatalogChange;
use crate::domain::{FieldErrors, Movie};

/// Shown by the list view when a search matches nothing
pub const NO_MOVIES_NOTICE: &str = "No movies.";

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub runtime: u32,
    pub director: String,
    pub actors: String,
    pub genres: Vec<String>,
    /// Year and runtime line under the title, e.g. "1949 104 min"
    pub info: String,
}

/// Raw edit-dialog contents
/// Missing keys are treated as blank inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieDraftDto {
    /// Present when editing an existing listing
    pub id: Option<String>,
    pub title: String,
    pub year: String,
    pub runtime: String,
    pub director: String,
    pub actors: String,
    pub genres: Vec<String>,
}

// ============================================================================
// SEARCH DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDto {
    pub term: String,
    /// "title", "year" or "runtime"; absent means the configured default
    pub sort_by: Option<String>,
    pub page: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultsDto {
    pub movies: Vec<MovieDto>,
    /// Set when there is nothing to list
    pub notice: Option<String>,
    /// Catalog revision the results were read at
    pub revision: u64,
}

/// Answer to the list view's "do I need to search again?"
#[derive(Debug, Clone, Serialize)]
pub struct RefreshDto {
    pub revision: u64,
    pub stale: bool,
    pub last_change: Option<CatalogChange>,
}

// ============================================================================
// RESPONSE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponseDto {
    pub saved: bool,
    pub movie: Option<MovieDto>,
    /// Toast text on success
    pub notice: Option<String>,
    /// Field name → message, empty on success
    pub errors: BTreeMap<String, String>,
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            info: format!("{} {} min", movie.year, movie.runtime),
            title: movie.title,
            year: movie.year,
            runtime: movie.runtime,
            director: movie.director,
            actors: movie.actors,
            genres: movie.genres.into_vec(),
        }
    }
}

impl SearchResultsDto {
    pub fn from_movies(movies: Vec<Movie>, revision: u64) -> Self {
        let notice = movies.is_empty().then(|| NO_MOVIES_NOTICE.to_string());
        Self {
            movies: movies.into_iter().map(MovieDto::from).collect(),
            notice,
            revision,
        }
    }
}

impl SaveResponseDto {
    pub fn saved(movie: Movie, notice: &str) -> Self {
        Self {
            saved: true,
            movie: Some(MovieDto::from(movie)),
            notice: Some(notice.to_string()),
            errors: BTreeMap::new(),
        }
    }

    pub fn rejected(errors: &FieldErrors) -> Self {
        Self {
            saved: false,
            movie: None,
            notice: None,
            errors: errors
                .iter()
                .map(|(field, error)| (field.to_string(), error.to_string()))
                .collect(),
        }
    }
}
