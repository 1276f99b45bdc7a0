// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the view and services
// - Commands accept DTOs, return DTOs
// - Commands convert errors to JSON ErrorResponse strings
// - Commands NEVER contain business logic

pub mod movie_commands;

pub use movie_commands::*;
