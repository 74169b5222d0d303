//! Repository layer for persisting land registry entities to SQLite
//!
//! Reads are generic over [`StoredEntity`]; each entity module supplies its
//! table, column list, row mapping and upsert statement.

mod land_details;
mod land_owner;
mod owner_link;
mod property_details;
mod sqlite_repo;
mod witness;

pub use sqlite_repo::{ScopedEntity, SqliteRepo, StoredEntity};
