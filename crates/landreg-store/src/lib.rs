//! Land registry store - SQLite persistence for the land registry
//!
//! Provides:
//! - Connection helpers with WAL and busy-timeout configuration
//! - Embedded SQL migrations with checksums
//! - Per-entity repositories over `rusqlite`
//! - `SqliteRegistry`, a transactional implementation of every core gateway

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod sqlite_registry;

// Re-export key types
pub use errors::Result;
pub use sqlite_registry::SqliteRegistry;
