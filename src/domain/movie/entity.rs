use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::genre::GenreSet;

/// Earliest release year a movie may carry (inclusive)
pub const YEAR_MIN: i32 = 1900;

/// Latest release year a movie may carry (inclusive)
pub const YEAR_MAX: i32 = 2050;

/// A single catalog entry
/// Only accepted drafts become Movies, so a Movie always satisfies its invariants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Display title
    pub title: String,

    /// Release year, within YEAR_MIN..=YEAR_MAX
    pub year: i32,

    /// Running time in minutes
    pub runtime: u32,

    pub director: String,

    /// Free-text cast list
    pub actors: String,

    /// Genre tags (may be empty)
    pub genres: GenreSet,
}

impl Movie {
    /// Create a new Movie with a fresh identifier and no genres
    pub fn new(
        title: impl Into<String>,
        year: i32,
        runtime: u32,
        director: impl Into<String>,
        actors: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            year,
            runtime,
            director: director.into(),
            actors: actors.into(),
            genres: GenreSet::new(),
        }
    }

    /// Builder-style genre assignment
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().collect();
        self
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}
