use std::path::PathBuf;

use bibothek_catalog::{Field, FilterSelection};
use bibothek_import::SUPPORTED_EXTENSIONS;

use crate::app::BibothekApp;

/// Label shown for the "no constraint" choice.
const UNSET_LABEL: &str = "(any)";

/// What the user did in the sidebar this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    Select(FilterSelection),
    Reset,
    Reimport,
    ChangeSource(PathBuf),
}

/// Render the filter controls, reset and import buttons, and the about box.
pub fn show(ui: &mut egui::Ui, app: &BibothekApp) -> SidebarAction {
    let mut action = SidebarAction::None;

    ui.add_space(8.0);
    ui.heading("Filter");
    ui.separator();
    ui.add_space(4.0);

    let mut selection = app.selection.clone();
    let mut changed = false;

    egui::ScrollArea::vertical()
        .id_salt("filter_controls")
        .show(ui, |ui| {
            for field in Field::ALL {
                if field_combo(ui, field, app.page.options(field), &mut selection) {
                    changed = true;
                }
                ui.add_space(4.0);
            }

            ui.add_space(8.0);

            if ui
                .add_enabled(!app.selection.is_idle(), egui::Button::new("Reset filters"))
                .clicked()
            {
                action = SidebarAction::Reset;
            }

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(app.has_storage(), egui::Button::new("Re-import"))
                    .on_hover_text("Read the source spreadsheet again")
                    .clicked()
                {
                    action = SidebarAction::Reimport;
                }
                if ui
                    .add_enabled(app.has_storage(), egui::Button::new("Import from..."))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Spreadsheet", SUPPORTED_EXTENSIONS)
                        .pick_file()
                    {
                        action = SidebarAction::ChangeSource(path);
                    }
                }
            });

            ui.add_space(8.0);
            show_about(ui, app);
        });

    if changed && action == SidebarAction::None {
        action = SidebarAction::Select(selection);
    }
    action
}

/// One combo box for `field`. Returns true when the choice changed.
fn field_combo(
    ui: &mut egui::Ui,
    field: Field,
    options: &[String],
    selection: &mut FilterSelection,
) -> bool {
    let mut current = selection.raw(field).to_string();
    let before = current.clone();

    ui.label(field.label());
    let selected_text = if current.is_empty() {
        UNSET_LABEL
    } else {
        current.as_str()
    };
    egui::ComboBox::from_id_salt(("filter", field))
        .selected_text(selected_text.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut current, String::new(), UNSET_LABEL);
            for value in options {
                ui.selectable_value(&mut current, value.clone(), value.as_str());
            }
        });

    if current != before {
        selection.set(field, current);
        true
    } else {
        false
    }
}

fn show_about(ui: &mut egui::Ui, app: &BibothekApp) {
    egui::CollapsingHeader::new("About")
        .default_open(false)
        .show(ui, |ui| {
            ui.strong("Bibothek book tracking");
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.label("Built with egui.");
            ui.add_space(4.0);
            ui.label(format!("Books in catalog: {}", app.page.total));
            ui.label("Database:");
            ui.monospace(app.settings.storage.database_path.display().to_string());
            ui.label("Source:");
            ui.monospace(app.settings.import.source_path.display().to_string());
            if let Some(stats) = &app.last_import {
                ui.weak(format!(
                    "Last import: {} books, {} blank rows skipped",
                    stats.books_stored, stats.blank_rows_skipped
                ));
            }
        });
}
