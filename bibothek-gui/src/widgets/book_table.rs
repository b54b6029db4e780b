use bibothek_catalog::{Book, Field};
use egui_extras::{Column, TableBuilder};

/// Render the filtered books as a striped table, one column per field.
pub fn show(ui: &mut egui::Ui, books: &[Book]) {
    let available_height = ui.available_height();
    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    egui::ScrollArea::horizontal()
        .id_salt("book_table_scroll")
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::initial(180.0).at_least(80.0)) // Title
                .column(Column::initial(120.0).at_least(60.0)) // Author
                .column(Column::initial(90.0).at_least(50.0)) // Genre
                .column(Column::initial(50.0).at_least(40.0)) // Year
                .column(Column::initial(80.0).at_least(40.0)) // Age group
                .column(Column::initial(70.0).at_least(40.0)) // Language
                .column(Column::remainder().at_least(80.0)) // Location
                .min_scrolled_height(0.0)
                .max_scroll_height(available_height)
                .header(20.0, |mut header| {
                    for field in Field::ALL {
                        header.col(|ui| {
                            ui.strong(field.label());
                        });
                    }
                })
                .body(|body| {
                    body.rows(text_height, books.len(), |mut row| {
                        let book = &books[row.index()];
                        for field in Field::ALL {
                            row.col(|ui| {
                                ui.add(egui::Label::new(book.text(field).as_ref()).truncate());
                            });
                        }
                    });
                });
        });
}
