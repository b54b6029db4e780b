use crate::page::PageModel;
use crate::widgets;

/// Render the list pane: one summary per active filter, then the table.
pub fn show(ui: &mut egui::Ui, page: &PageModel) {
    ui.heading("Book list");
    ui.add_space(4.0);

    for line in &page.summaries {
        ui.label(line);
    }
    ui.weak(format!("Showing {} of {} books", page.filtered.len(), page.total));

    ui.separator();

    widgets::book_table::show(ui, &page.filtered);
}
