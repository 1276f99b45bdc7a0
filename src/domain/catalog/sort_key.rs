use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::movie::Movie;
use crate::domain::DomainError;

/// Field the movie list is ordered by (always ascending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    Year,
    Runtime,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Title, SortKey::Year, SortKey::Runtime];

    /// Ascending comparator for this key
    /// Titles compare case-insensitively, year and runtime numerically
    pub fn compare(&self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            SortKey::Title => compare_titles(&a.title, &b.title),
            SortKey::Year => a.year.cmp(&b.year),
            SortKey::Runtime => a.runtime.cmp(&b.runtime),
        }
    }

    /// Label shown in the sort dropdown
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Year => "Year",
            SortKey::Runtime => "Runtime",
        }
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Title => write!(f, "title"),
            SortKey::Year => write!(f, "year"),
            SortKey::Runtime => write!(f, "runtime"),
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "year" => Ok(SortKey::Year),
            "runtime" => Ok(SortKey::Runtime),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown sort key: {}",
                other
            ))),
        }
    }
}
