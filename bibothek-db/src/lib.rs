//! SQLite persistence layer for the book catalog.
//!
//! Provides schema creation, the bulk replace used by imports, and the
//! read queries behind the catalog page, backed by SQLite (via rusqlite with
//! the bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{replace_all, StorageError};
pub use queries::{count_books, read_all};
pub use schema::{ensure_schema, open_database, open_memory, BOOKS_TABLE};
