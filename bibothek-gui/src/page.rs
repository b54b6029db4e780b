//! Everything the page shows, computed from the catalog and the selection.
//!
//! Rebuilt from scratch whenever the selection changes. Charts count the
//! whole catalog, not the filtered list.

use bibothek_catalog::{count_by, distinct_values, filter, Book, Field, FilterSelection, GroupCount};

/// One bar chart: book counts per value of `field` across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub field: Field,
    pub counts: Vec<GroupCount>,
}

impl Chart {
    pub fn caption(&self) -> String {
        format!("All your books grouped by {}.", self.field.label().to_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageModel {
    /// Choices for each sidebar control, indexed by [`Field::index`].
    options: Vec<Vec<String>>,
    pub filtered: Vec<Book>,
    /// One line per active field, in field order.
    pub summaries: Vec<String>,
    /// One chart per active field, in field order.
    pub charts: Vec<Chart>,
    /// Last active field in field order.
    pub active_field: Option<Field>,
    pub total: usize,
}

impl PageModel {
    pub fn build(all: &[Book], selection: &FilterSelection) -> Self {
        let options = Field::ALL
            .iter()
            .map(|&field| distinct_values(all, field))
            .collect();

        let filtered = filter::apply(all, selection);

        let summaries = selection
            .active()
            .map(|(field, value)| summary_line(filtered.len(), field, value))
            .collect();

        let charts = selection
            .active()
            .map(|(field, _)| Chart {
                field,
                counts: count_by(all, field),
            })
            .collect();

        Self {
            options,
            filtered,
            summaries,
            charts,
            active_field: selection.active_field(),
            total: all.len(),
        }
    }

    /// Distinct values offered for `field`, in first-seen order.
    pub fn options(&self, field: Field) -> &[String] {
        self.options
            .get(field.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// No filter is set.
    pub fn is_idle(&self) -> bool {
        self.charts.is_empty()
    }
}

pub fn summary_line(count: usize, field: Field, value: &str) -> String {
    let noun = if count == 1 { "book" } else { "books" };
    format!(
        "Your library contains {} {} with {} {}.",
        count,
        noun,
        field.label().to_lowercase(),
        value
    )
}
