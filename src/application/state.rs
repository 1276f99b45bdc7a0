// src/application/state.rs

use std::sync::Arc;

use crate::application::refresh::ListRefresh;
use crate::config::CatalogConfig;
use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
    ConnectionPool,
};
use crate::error::AppResult;
use crate::events::EventBus;
use crate::repositories::{MovieRepository, SqliteMovieRepository};
use crate::services::MovieService;

/// Application state shared by the command handlers.
/// All fields are Arc-wrapped for thread-safe sharing.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub movie_service: Arc<MovieService>,
    pub list_refresh: Arc<ListRefresh>,
}

impl AppState {
    /// Wire infrastructure, repositories and services from configuration
    pub fn initialize(config: CatalogConfig) -> AppResult<Self> {
        let db_path = config.resolve_database_path()?;
        let pool = Arc::new(create_connection_pool(&db_path)?);
        Self::with_pool(pool, config)
    }

    /// Same wiring over an existing pool
    pub fn with_pool(pool: Arc<ConnectionPool>, config: CatalogConfig) -> AppResult<Self> {
        config.validate()?;

        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());
        let list_refresh = ListRefresh::attach(&event_bus);

        // Initialize schema (idempotent)
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
        }

        // 2. REPOSITORIES
        let movie_repo: Arc<dyn MovieRepository> = Arc::new(SqliteMovieRepository::new(pool));

        // 3. SERVICES
        let movie_service = Arc::new(MovieService::new(movie_repo, event_bus.clone(), config));

        Ok(Self {
            event_bus,
            movie_service,
            list_refresh,
        })
    }
}
