//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits on a locked database before giving up
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a SQLite database at the given path, creating parent directories
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
    }

    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;

    // WAL for better concurrency; not available for in-memory databases
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(from_rusqlite)?;
    tracing::debug!(path = %path.display(), journal_mode = %mode, "opened database");

    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection with the settings every registry connection shares
pub fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT).map_err(from_rusqlite)?;
    Ok(())
}
