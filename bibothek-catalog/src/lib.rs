//! Book catalog data model, field filtering, and group-by statistics.
//!
//! This crate defines the catalog record types without any database or
//! spreadsheet dependencies. `bibothek-db` persists them, `bibothek-import`
//! produces them, and the GUI filters and charts them through [`filter`] and
//! [`stats`].

pub mod filter;
pub mod stats;
pub mod types;

pub use filter::{apply, matches};
pub use stats::{count_by, distinct_values, GroupCount};
pub use types::*;
