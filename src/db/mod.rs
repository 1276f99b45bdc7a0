// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema migrations
// - Database utilities

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_memory_pool, get_connection, ConnectionPool, PooledConn,
};

pub use migrations::{initialize_database, verify_database_integrity};
