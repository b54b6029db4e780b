//! Group-by counts and distinct values for a single field.

use std::collections::{BTreeMap, HashSet};

use crate::types::{Book, Field};

/// Number of books sharing one value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub value: String,
    pub count: usize,
}

/// Grouping key. Years sort numerically, everything else lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum GroupKey {
    Year(i32),
    Text(String),
}

impl GroupKey {
    fn of(book: &Book, field: Field) -> Self {
        match field {
            Field::Year => GroupKey::Year(book.year),
            _ => GroupKey::Text(book.text(field).into_owned()),
        }
    }

    fn into_value(self) -> String {
        match self {
            GroupKey::Year(year) => year.to_string(),
            GroupKey::Text(text) => text,
        }
    }
}

/// Count books per distinct value of `field`, sorted by value.
///
/// The counts always sum to `books.len()`.
pub fn count_by(books: &[Book], field: Field) -> Vec<GroupCount> {
    let mut groups: BTreeMap<GroupKey, usize> = BTreeMap::new();
    for book in books {
        *groups.entry(GroupKey::of(book, field)).or_insert(0) += 1;
    }

    groups
        .into_iter()
        .map(|(key, count)| GroupCount {
            value: key.into_value(),
            count,
        })
        .collect()
}

/// Distinct texts of `field`, in first-seen order.
pub fn distinct_values(books: &[Book], field: Field) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for book in books {
        let text = book.text(field);
        if seen.insert(text.clone().into_owned()) {
            values.push(text.into_owned());
        }
    }
    values
}
