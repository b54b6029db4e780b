use crate::app::BibothekApp;

/// Upcoming features listed in the help panel.
const PLANNED: &[&str] = &[
    "Import by drag and drop",
    "Edit and delete single books",
    "Location history per book",
    "More charts",
];

/// Render the page title, the help panel, and the error banner.
pub fn show(ui: &mut egui::Ui, app: &BibothekApp) {
    ui.add_space(4.0);
    ui.heading("Bibothek");

    egui::CollapsingHeader::new("What can this app do?")
        .default_open(false)
        .show(ui, |ui| {
            ui.label(
                "Bibothek keeps a catalog of your books. It reads a spreadsheet listing \
                 each book's title, author, genre, year, age group, language, and current \
                 location (your own shelf, at a friend's, at the grandparents', and so on), \
                 stores it in a local database, and shows it as a table. Pick values in \
                 the sidebar to narrow the list; every active filter also gets a chart of \
                 how your whole library splits up by that field.",
            );
            ui.add_space(4.0);
            ui.label("Planned for upcoming updates:");
            for item in PLANNED {
                ui.label(format!("• {}", item));
            }
        });

    if let Some(error) = &app.last_error {
        ui.add_space(4.0);
        ui.colored_label(ui.visuals().error_fg_color, error);
    }
    ui.add_space(4.0);
}
