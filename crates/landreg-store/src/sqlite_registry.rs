//! SQLite-backed registry
//!
//! Implements every core gateway over a single `rusqlite` connection.
//! Transactions are explicit `BEGIN IMMEDIATE` / `COMMIT` / `ROLLBACK`
//! statements; the connection's autocommit flag tells whether one is open.

use std::path::Path;

use landreg_core::errors::{RegistryError, Result};
use landreg_core::gateway::{Gateway, LandDetailsScoped, Transactional};
use landreg_core::model::EntityId;
use landreg_core::{LandDetails, LandDetailsLandOwner, LandOwner, PropertyDetails, Witness};
use rusqlite::Connection;

use crate::db;
use crate::errors::from_rusqlite;
use crate::migrations::apply_migrations;
use crate::repo::SqliteRepo;

/// Registry over a migrated SQLite database
pub struct SqliteRegistry {
    conn: Connection,
}

impl SqliteRegistry {
    /// Open (or create) a database file and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(db::open(path)?)
    }

    /// Fresh in-memory database with the schema applied
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an existing connection, applying pending migrations
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// True while a transaction is open
    pub fn in_transaction_scope(&self) -> bool {
        !self.conn.is_autocommit()
    }
}

macro_rules! sqlite_gateway {
    ($entity:ty, $save:ident) => {
        impl Gateway<$entity> for SqliteRegistry {
            fn save(&mut self, entity: $entity) -> Result<$entity> {
                SqliteRepo::$save(&self.conn, entity)
            }

            fn find_by_id(&self, id: EntityId) -> Result<Option<$entity>> {
                SqliteRepo::find_by_id(&self.conn, id)
            }

            fn find_all(&self) -> Result<Vec<$entity>> {
                SqliteRepo::find_all(&self.conn)
            }

            fn exists_by_id(&self, id: EntityId) -> Result<bool> {
                SqliteRepo::exists_by_id::<$entity>(&self.conn, id)
            }

            fn delete_by_id(&mut self, id: EntityId) -> Result<()> {
                SqliteRepo::delete_by_id::<$entity>(&self.conn, id)
            }
        }
    };
    ($entity:ty, $save:ident, scoped) => {
        sqlite_gateway!($entity, $save);

        impl LandDetailsScoped<$entity> for SqliteRegistry {
            fn find_by_land_details_id(&self, land_details_id: EntityId) -> Result<Vec<$entity>> {
                SqliteRepo::find_by_land_details_id(&self.conn, land_details_id)
            }
        }
    };
}

sqlite_gateway!(LandDetails, save_land_details);
sqlite_gateway!(LandOwner, save_land_owner);
sqlite_gateway!(LandDetailsLandOwner, save_owner_link, scoped);
sqlite_gateway!(PropertyDetails, save_property_details, scoped);
sqlite_gateway!(Witness, save_witness, scoped);

impl Transactional for SqliteRegistry {
    fn begin(&mut self) -> Result<()> {
        if self.in_transaction_scope() {
            return Err(RegistryError::TransactionAlreadyActive.into());
        }
        self.conn
            .execute_batch("BEGIN IMMEDIATE")
            .map_err(from_rusqlite)?;
        tracing::debug!("transaction started");
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        if !self.in_transaction_scope() {
            return Err(RegistryError::NoActiveTransaction.into());
        }
        self.conn.execute_batch("COMMIT").map_err(from_rusqlite)?;
        tracing::debug!("transaction committed");
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        if !self.in_transaction_scope() {
            return Err(RegistryError::NoActiveTransaction.into());
        }
        self.conn.execute_batch("ROLLBACK").map_err(from_rusqlite)?;
        tracing::debug!("transaction rolled back");
        Ok(())
    }
}
