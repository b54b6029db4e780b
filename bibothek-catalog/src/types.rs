//! Data model types for the book catalog.
//!
//! A [`Book`] is one row of the catalog, [`Field`] names its seven columns in
//! their fixed order, and [`FilterSelection`] holds the per-field query values
//! chosen in the sidebar.

use std::borrow::Cow;
use std::fmt;

// ── Book ────────────────────────────────────────────────────────────────────

/// A single catalogued book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
    pub age_group: String,
    pub language: String,
    /// Free text describing where the book physically is right now
    /// (a shelf, a friend's place, the grandparents' house, ...).
    pub location: String,
}

impl Book {
    /// Text of the given field. The year is rendered in decimal.
    pub fn text(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Title => Cow::Borrowed(&self.title),
            Field::Author => Cow::Borrowed(&self.author),
            Field::Genre => Cow::Borrowed(&self.genre),
            Field::Year => Cow::Owned(self.year.to_string()),
            Field::AgeGroup => Cow::Borrowed(&self.age_group),
            Field::Language => Cow::Borrowed(&self.language),
            Field::Location => Cow::Borrowed(&self.location),
        }
    }
}

// ── Field ───────────────────────────────────────────────────────────────────

/// One of the seven catalog columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Author,
    Genre,
    Year,
    AgeGroup,
    Language,
    Location,
}

impl Field {
    /// Every field in the fixed enumeration order.
    ///
    /// This order is the spreadsheet column order, the table column order,
    /// and the order in which active filters produce summaries and charts.
    /// The last set field in this order is the active grouping field.
    pub const ALL: [Field; 7] = [
        Field::Title,
        Field::Author,
        Field::Genre,
        Field::Year,
        Field::AgeGroup,
        Field::Language,
        Field::Location,
    ];

    /// Position of this field in [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable column label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Genre => "Genre",
            Field::Year => "Year",
            Field::AgeGroup => "Age group",
            Field::Language => "Language",
            Field::Location => "Location",
        }
    }

    /// Column name in the `books` table.
    pub fn column(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Genre => "genre",
            Field::Year => "year",
            Field::AgeGroup => "age_group",
            Field::Language => "language",
            Field::Location => "location",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Filter Selection ────────────────────────────────────────────────────────

/// Per-field query values. An empty (or whitespace-only) value means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    values: [String; 7],
}

impl FilterSelection {
    /// A selection with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests and callers assembling a
    /// selection in one expression.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn unset(&mut self, field: Field) {
        self.values[field.index()].clear();
    }

    /// The query value for `field`, or `None` when it imposes no constraint.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = self.values[field.index()].as_str();
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Raw stored value, including empty strings. Used by selection widgets.
    pub fn raw(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Clear every field back to unset.
    pub fn reset(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Set fields and their values, in [`Field::ALL`] order.
    pub fn active(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    /// The grouping field: the last set field in [`Field::ALL`] order.
    pub fn active_field(&self) -> Option<Field> {
        self.active().last().map(|(field, _)| field)
    }

    /// True when no field is set.
    pub fn is_idle(&self) -> bool {
        self.active().next().is_none()
    }
}
