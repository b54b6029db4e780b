//! Import spreadsheets into the book catalog database.
//!
//! This crate owns reading the source document (xlsx/xlsb/xls/ods through
//! calamine, csv through the csv crate), validating its seven fixed columns,
//! and replacing the catalog contents once per session.

pub mod book_import;
pub mod progress;
pub mod spreadsheet;

pub use book_import::{import_books, ImportError, ImportOutcome, ImportSession, ImportStats};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use spreadsheet::{read_spreadsheet, SheetContents, SpreadsheetKind, SUPPORTED_EXTENSIONS};
