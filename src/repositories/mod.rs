// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO event emission
// - Explicit SQL only

pub mod movie_repository;

pub use movie_repository::{MovieRepository, SqliteMovieRepository};

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
