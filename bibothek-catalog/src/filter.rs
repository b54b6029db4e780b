//! Field filtering over an in-memory book list.
//!
//! Each set field keeps the books whose field text contains the query,
//! ignoring case. Set fields combine with AND; unset fields are ignored.

use crate::types::{Book, FilterSelection};

/// Return the books matching every set field of `selection`.
///
/// The input is left untouched. An empty result is not an error.
pub fn apply(books: &[Book], selection: &FilterSelection) -> Vec<Book> {
    books
        .iter()
        .filter(|book| matches(book, selection))
        .cloned()
        .collect()
}

/// Whether a single book satisfies every set field of `selection`.
pub fn matches(book: &Book, selection: &FilterSelection) -> bool {
    selection.active().all(|(field, value)| {
        book.text(field)
            .to_lowercase()
            .contains(&value.to_lowercase())
    })
}
