//! Bibothek GUI
//!
//! Single-window catalog page: a filter sidebar, the filtered book list, and
//! one bar chart per active filter field.

pub mod app;
pub mod page;
pub mod settings;
pub mod views;
pub mod widgets;

pub use app::BibothekApp;
pub use page::{Chart, PageModel};
