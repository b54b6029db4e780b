//! Write operations on the catalog table.

use bibothek_catalog::{Book, Field};
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::queries;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Book '{title}' has an empty {field}")]
    EmptyField { title: String, field: Field },
}

/// Replace the whole catalog with `books`.
///
/// Runs in one transaction: either every book is stored and the previous
/// contents are gone, or nothing changes. The id sequence restarts at 1.
pub fn replace_all(conn: &Connection, books: &[Book]) -> Result<usize, StorageError> {
    for book in books {
        check_required(book)?;
    }

    let tx = conn.unchecked_transaction()?;

    tx.execute("DELETE FROM books", [])?;
    // sqlite_sequence only exists once an AUTOINCREMENT row has been written
    let has_sequence: bool = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='sqlite_sequence')",
        [],
        |row| row.get(0),
    )?;
    if has_sequence {
        tx.execute("DELETE FROM sqlite_sequence WHERE name = 'books'", [])?;
    }

    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO books ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            queries::column_list()
        ))?;
        for book in books {
            stmt.execute(params![
                book.title,
                book.author,
                book.genre,
                book.year,
                book.age_group,
                book.language,
                book.location,
            ])?;
        }
    }

    tx.commit()?;

    log::info!("Stored {} books in the catalog", books.len());
    Ok(books.len())
}

/// The schema declares every text column NOT NULL; empty strings are
/// rejected here too.
fn check_required(book: &Book) -> Result<(), StorageError> {
    for field in Field::ALL {
        if field != Field::Year && book.text(field).trim().is_empty() {
            return Err(StorageError::EmptyField {
                title: book.title.clone(),
                field,
            });
        }
    }
    Ok(())
}
