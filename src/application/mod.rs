// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above domain, repositories and services
// - Provides the boundary between the list/edit views and the services
// - Translates between DTOs and domain entities

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod refresh;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use refresh::{CatalogChange, ChangeKind, ListRefresh};
pub use state::AppState;
