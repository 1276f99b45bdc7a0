// src/config.rs
//
// Catalog configuration
//
// Loaded from a JSON file; every key is optional and falls back to the
// behavior of the movie list page (10 titles, sorted by title).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{GenreSelector, PageSize, SortKey, DEFAULT_GENRES};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Titles per result page
    pub page_size: PageSize,

    /// Order used when the view does not pick a sort key
    pub default_sort: Option<SortKey>,

    /// Genres offered by the tag menu, in menu order
    pub genres: Vec<String>,

    /// SQLite file; None means the per-user data directory
    pub database_path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::DEFAULT,
            default_sort: Some(SortKey::Title),
            genres: DEFAULT_GENRES.iter().map(|g| g.to_string()).collect(),
            database_path: None,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        log::info!("Loaded catalog configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| AppError::Config(format!("Malformed configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the catalog cannot run with
    pub fn validate(&self) -> AppResult<()> {
        if self.genres.iter().all(|g| g.trim().is_empty()) {
            return Err(AppError::Config(
                "Genre vocabulary cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Fresh tag menu over the configured vocabulary
    pub fn genre_selector(&self) -> GenreSelector {
        GenreSelector::new(self.genres.iter().cloned())
    }

    /// Database file location
    ///
    /// Default path structure: {APP_DATA}/movielist/movielist.db
    pub fn resolve_database_path(&self) -> AppResult<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let app_data_dir = dirs::data_dir()
            .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;

        let movielist_dir = app_data_dir.join("movielist");
        std::fs::create_dir_all(&movielist_dir)?;

        Ok(movielist_dir.join("movielist.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.page_size.get(), 10);
        assert_eq!(config.default_sort, Some(SortKey::Title));
        assert!(config.genres.iter().any(|g| g == "Comedy"));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = CatalogConfig::from_json(r#"{ "default_sort": "year" }"#).unwrap();
        assert_eq!(config.default_sort, Some(SortKey::Year));
        assert_eq!(config.page_size, PageSize::DEFAULT);
    }

    #[test]
    fn test_null_sort_keeps_storage_order() {
        let config = CatalogConfig::from_json(r#"{ "default_sort": null }"#).unwrap();
        assert_eq!(config.default_sort, None);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = CatalogConfig::from_json(r#"{ "page_size": 0 }"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        let err = CatalogConfig::from_json(r#"{ "genres": [] }"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{ "page_size": 5, "genres": ["Noir", "Comedy"] }"#).unwrap();

        let config = CatalogConfig::load(&path).unwrap();
        assert_eq!(config.page_size.get(), 5);
        assert_eq!(config.genre_selector().vocabulary(), &["Noir", "Comedy"]);
    }

    #[test]
    fn test_explicit_database_path_wins() {
        let config = CatalogConfig {
            database_path: Some(PathBuf::from("/tmp/movies.db")),
            ..CatalogConfig::default()
        };
        assert_eq!(config.resolve_database_path().unwrap(), PathBuf::from("/tmp/movies.db"));
    }
}
