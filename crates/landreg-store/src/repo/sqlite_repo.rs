//! SQLite repository implementation

use crate::errors::{from_rusqlite, Result};
use landreg_core::model::EntityId;
use rusqlite::{Connection, OptionalExtension, Row, ToSql};

/// An entity stored in its own table with an `id INTEGER PRIMARY KEY`
pub trait StoredEntity: Sized {
    const TABLE: &'static str;
    /// Column list in the order [`StoredEntity::from_row`] reads it, `id` first
    const COLUMNS: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// A stored entity with a `land_details_id` reference column
pub trait ScopedEntity: StoredEntity {}

/// SQLite repository for land registry entities
pub struct SqliteRepo;

impl SqliteRepo {
    /// Fetch one row by identity
    pub fn find_by_id<E: StoredEntity>(conn: &Connection, id: EntityId) -> Result<Option<E>> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?", E::COLUMNS, E::TABLE);
        let mut stmt = conn.prepare_cached(&sql).map_err(from_rusqlite)?;

        let result = stmt
            .query_row([id], E::from_row)
            .optional()
            .map_err(from_rusqlite)?;

        Ok(result)
    }

    /// Every row, ordered by identity
    pub fn find_all<E: StoredEntity>(conn: &Connection) -> Result<Vec<E>> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", E::COLUMNS, E::TABLE);
        let mut stmt = conn.prepare_cached(&sql).map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], E::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Rows referencing `land_details_id`, ordered by identity
    pub fn find_by_land_details_id<E: ScopedEntity>(
        conn: &Connection,
        land_details_id: EntityId,
    ) -> Result<Vec<E>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE land_details_id = ? ORDER BY id",
            E::COLUMNS,
            E::TABLE
        );
        let mut stmt = conn.prepare_cached(&sql).map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([land_details_id], E::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    pub fn exists_by_id<E: StoredEntity>(conn: &Connection, id: EntityId) -> Result<bool> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?", E::TABLE);
        let found = conn
            .query_row(&sql, [id], |_| Ok(()))
            .optional()
            .map_err(from_rusqlite)?;

        Ok(found.is_some())
    }

    /// Delete by identity; a missing row is not an error
    pub fn delete_by_id<E: StoredEntity>(conn: &Connection, id: EntityId) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        conn.execute(&sql, [id]).map_err(from_rusqlite)?;
        Ok(())
    }

    /// Run an `INSERT ... ON CONFLICT(id) DO UPDATE` statement and return
    /// the row's identity
    ///
    /// `params` must bind `id` (possibly NULL) as `?1`. A row inserted without
    /// identity takes the rowid SQLite assigned.
    pub(crate) fn upsert(
        conn: &Connection,
        id: Option<EntityId>,
        sql: &str,
        params: &[&dyn ToSql],
    ) -> Result<EntityId> {
        conn.execute(sql, params).map_err(from_rusqlite)?;
        Ok(id.unwrap_or_else(|| conn.last_insert_rowid()))
    }
}
