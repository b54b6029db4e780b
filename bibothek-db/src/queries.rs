//! Read queries for the catalog database.

use bibothek_catalog::{Book, Field};
use rusqlite::{Connection, Row};

use crate::operations::StorageError;

/// Every stored book, in insertion order.
pub fn read_all(conn: &Connection) -> Result<Vec<Book>, StorageError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM books ORDER BY id",
        column_list()
    ))?;
    let rows = stmt.query_map([], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Number of stored books.
pub fn count_books(conn: &Connection) -> Result<usize, StorageError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// The seven record columns in field order, comma separated.
pub(crate) fn column_list() -> String {
    Field::ALL.map(Field::column).join(", ")
}

/// Columns are read in [`Field::ALL`] order.
fn row_to_book(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        title: row.get(0)?,
        author: row.get(1)?,
        genre: row.get(2)?,
        year: row.get(3)?,
        age_group: row.get(4)?,
        language: row.get(5)?,
        location: row.get(6)?,
    })
}
