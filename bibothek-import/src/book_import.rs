//! Replace the catalog with the books from a source spreadsheet.
//!
//! [`ImportSession`] remembers whether this session already imported, so the
//! page can ask for an import on every start-up path without re-reading the
//! source document.

use std::path::{Path, PathBuf};

use bibothek_catalog::Field;
use bibothek_db::operations::{self, StorageError};
use rusqlite::Connection;
use thiserror::Error;

use crate::progress::ImportProgress;
use crate::spreadsheet;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Source document not found: {}", .0.display())]
    SourceMissing(PathBuf),
    #[error(
        "Unsupported source format: {} (expected one of: {})",
        .0.display(),
        spreadsheet::SUPPORTED_EXTENSIONS.join(", ")
    )]
    UnsupportedFormat(PathBuf),
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Source document has no rows")]
    EmptyWorkbook,
    #[error("Row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Row {row}: missing {field}")]
    MissingValue { row: usize, field: Field },
    #[error("Row {row}: year '{value}' is not a whole number")]
    InvalidYear { row: usize, value: String },
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Statistics from a single import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub rows_read: usize,
    pub blank_rows_skipped: usize,
    pub books_stored: usize,
}

/// What [`ImportSession::import_once`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(ImportStats),
    /// This session already imported; the source and store were not touched.
    AlreadyImported,
}

/// Per-session import memo.
///
/// Created once when the application starts. After the first successful
/// import, further calls are no-ops until [`invalidate`](Self::invalidate)
/// is called. A changed source document is not picked up on its own.
#[derive(Debug, Default)]
pub struct ImportSession {
    imported: bool,
}

impl ImportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this session has completed an import.
    pub fn is_imported(&self) -> bool {
        self.imported
    }

    /// Forget the previous import so the next `import_once` reads again.
    pub fn invalidate(&mut self) {
        self.imported = false;
    }

    /// Import `source` into the catalog unless this session already did.
    ///
    /// A failed attempt leaves the session un-imported, so the user can fix
    /// the document and trigger the import again.
    pub fn import_once(
        &mut self,
        conn: &Connection,
        source: &Path,
        progress: Option<&dyn ImportProgress>,
    ) -> Result<ImportOutcome, ImportError> {
        if self.imported {
            log::debug!("Catalog already imported this session, skipping {}", source.display());
            return Ok(ImportOutcome::AlreadyImported);
        }

        let stats = import_books(conn, source, progress)?;
        self.imported = true;
        Ok(ImportOutcome::Imported(stats))
    }
}

/// Read `source` and replace the whole catalog with its books.
///
/// The catalog is only touched once the document parsed cleanly.
pub fn import_books(
    conn: &Connection,
    source: &Path,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    if let Some(p) = progress {
        p.on_phase(&format!("Reading {}", source.display()));
    }

    let contents = spreadsheet::read_spreadsheet(source, progress)?;
    let books_stored = operations::replace_all(conn, &contents.books)?;

    let stats = ImportStats {
        rows_read: contents.rows_read,
        blank_rows_skipped: contents.blank_rows_skipped,
        books_stored,
    };

    if let Some(p) = progress {
        p.on_complete(&format!(
            "Imported {} books from {} ({} blank rows skipped)",
            stats.books_stored,
            source.display(),
            stats.blank_rows_skipped
        ));
    }

    Ok(stats)
}
