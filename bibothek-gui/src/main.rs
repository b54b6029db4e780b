//! Bibothek
//!
//! Catalog your books from a spreadsheet and browse them by field.

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bibothek")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bibothek",
        options,
        Box::new(|cc| Ok(Box::new(bibothek_gui::BibothekApp::new(cc)))),
    )
}
