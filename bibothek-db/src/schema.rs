//! SQLite schema creation.

use std::path::Path;

use rusqlite::Connection;

use crate::operations::StorageError;

/// Name of the single catalog table.
pub const BOOKS_TABLE: &str = "books";

/// Create the `books` table if it doesn't exist.
///
/// This is idempotent, safe to call on an existing database.
pub fn ensure_schema(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a catalog database at the given path.
pub fn open_database(path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    ensure_schema(&conn)?;
    log::debug!("Opened catalog database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory()?;
    ensure_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    genre TEXT NOT NULL,
    year INTEGER NOT NULL,
    age_group TEXT NOT NULL,
    language TEXT NOT NULL,
    location TEXT NOT NULL
);
"#;
