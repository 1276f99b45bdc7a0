use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::field::FieldName;
use crate::domain::genre::GenreSet;
use crate::domain::movie::Movie;

/// In-progress edit of a movie, exactly as typed into the dialog
///
/// Numeric fields stay raw text so blank and malformed input can be
/// represented; `validate` turns a Draft into a Movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Identity of the movie being edited, or the one a new listing will get
    pub id: Uuid,
    pub title: String,
    pub year: String,
    pub runtime: String,
    pub director: String,
    pub actors: String,
    #[serde(default)]
    pub genres: GenreSet,
}

impl Draft {
    /// Empty draft for a new listing
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            year: String::new(),
            runtime: String::new(),
            director: String::new(),
            actors: String::new(),
            genres: GenreSet::new(),
        }
    }

    /// Draft pre-filled from an existing movie
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            year: movie.year.to_string(),
            runtime: movie.runtime.to_string(),
            director: movie.director.clone(),
            actors: movie.actors.clone(),
            genres: movie.genres.clone(),
        }
    }

    pub fn field(&self, field: FieldName) -> &str {
        match field {
            FieldName::Title => &self.title,
            FieldName::Year => &self.year,
            FieldName::Runtime => &self.runtime,
            FieldName::Director => &self.director,
            FieldName::Actors => &self.actors,
        }
    }

    /// Replace the text of one field
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Title => &mut self.title,
            FieldName::Year => &mut self.year,
            FieldName::Runtime => &mut self.runtime,
            FieldName::Director => &mut self.director,
            FieldName::Actors => &mut self.actors,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self, field: FieldName) {
        self.set(field, String::new());
    }
}

impl From<&Movie> for Draft {
    fn from(movie: &Movie) -> Self {
        Draft::from_movie(movie)
    }
}
