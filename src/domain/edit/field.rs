use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::domain::DomainError;

/// Editable text fields of the movie dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Title,
    Year,
    Runtime,
    Director,
    Actors,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Title,
        FieldName::Year,
        FieldName::Runtime,
        FieldName::Director,
        FieldName::Actors,
    ];
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldName::Title => write!(f, "title"),
            FieldName::Year => write!(f, "year"),
            FieldName::Runtime => write!(f, "runtime"),
            FieldName::Director => write!(f, "director"),
            FieldName::Actors => write!(f, "actors"),
        }
    }
}

impl FromStr for FieldName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(FieldName::Title),
            "year" => Ok(FieldName::Year),
            "runtime" => Ok(FieldName::Runtime),
            "director" => Ok(FieldName::Director),
            "actors" => Ok(FieldName::Actors),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown movie field: {}",
                other
            ))),
        }
    }
}

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field is required.")]
    Required,

    #[error("Invalid: must be a whole number.")]
    NotANumber,

    #[error("Invalid: must be between {min} and {max}.")]
    OutOfRange { min: i64, max: i64 },

    #[error("Invalid: must be greater than zero.")]
    NotPositive,
}

impl FieldError {
    /// Short category: "required" for blank fields, "invalid" otherwise
    pub fn kind(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            _ => "invalid",
        }
    }
}

/// All field violations of one save attempt, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Field → display message, as rendered under each input
    pub fn messages(&self) -> BTreeMap<FieldName, String> {
        self.0
            .iter()
            .map(|(field, error)| (*field, error.to_string()))
            .collect()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(field, error)| (field, error.to_string())))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}
