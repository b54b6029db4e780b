use std::path::PathBuf;

use bibothek_catalog::{Book, FilterSelection};
use bibothek_import::{ImportOutcome, ImportSession, ImportStats, LogProgress};
use rusqlite::Connection;

use crate::page::PageModel;
use crate::settings::{self, AppSettings};
use crate::views;
use crate::widgets;
use crate::widgets::filter_sidebar::SidebarAction;

/// Main application state.
pub struct BibothekApp {
    pub settings: AppSettings,

    /// Where `settings` is loaded from and saved to.
    settings_file: PathBuf,

    /// Catalog database. `None` when it could not be opened.
    conn: Option<Connection>,

    /// Remembers whether the source spreadsheet was imported this session.
    pub session: ImportSession,

    /// Full catalog as last read from storage.
    pub books: Vec<Book>,

    /// Current sidebar selection.
    pub selection: FilterSelection,

    /// Derived list, summaries, and charts for the current selection.
    pub page: PageModel,

    /// Last import or storage failure, shown until the next success.
    pub last_error: Option<String>,

    /// `last_error` came from reading the catalog, so the next good read
    /// clears it.
    read_failed: bool,

    pub last_import: Option<ImportStats>,
}

impl BibothekApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::open(settings::settings_path())
    }

    /// Load settings from `settings_file`, open the catalog, run the session
    /// import, and build the initial page.
    pub fn open(settings_file: PathBuf) -> Self {
        let settings = settings::load_settings_from(&settings_file);

        let mut last_error = None;
        let conn = match bibothek_db::open_database(&settings.storage.database_path) {
            Ok(conn) => Some(conn),
            Err(e) => {
                log::error!(
                    "Failed to open catalog database at {}: {}",
                    settings.storage.database_path.display(),
                    e
                );
                last_error = Some(format!("Failed to open catalog database: {}", e));
                None
            }
        };

        let mut app = Self {
            settings,
            settings_file,
            conn,
            session: ImportSession::new(),
            books: Vec::new(),
            selection: FilterSelection::new(),
            page: PageModel::default(),
            last_error,
            read_failed: false,
            last_import: None,
        };
        app.import();
        app.refresh();
        app
    }

    pub fn has_storage(&self) -> bool {
        self.conn.is_some()
    }

    /// Import the configured source unless this session already did.
    pub fn import(&mut self) {
        let Some(conn) = self.conn.as_ref() else {
            return;
        };

        let source = &self.settings.import.source_path;
        match self.session.import_once(conn, source, Some(&LogProgress)) {
            Ok(ImportOutcome::Imported(stats)) => {
                self.last_import = Some(stats);
                self.last_error = None;
                self.read_failed = false;
            }
            Ok(ImportOutcome::AlreadyImported) => {}
            Err(e) => {
                log::error!("Import of {} failed: {}", source.display(), e);
                self.last_error = Some(format!("Import failed: {}", e));
                self.read_failed = false;
            }
        }
    }

    /// Forget the session import and read the source again.
    pub fn reimport(&mut self) {
        self.session.invalidate();
        self.import();
        self.refresh();
    }

    /// Switch to a different source spreadsheet and import it.
    pub fn set_source(&mut self, path: PathBuf) {
        self.settings.import.source_path = path;
        if let Err(e) = settings::save_settings_to(&self.settings_file, &self.settings) {
            log::warn!("Failed to save settings: {}", e);
        }
        self.reimport();
    }

    /// Re-read the catalog and rebuild the page for the current selection.
    ///
    /// On a storage failure the last good catalog stays on screen.
    pub fn refresh(&mut self) {
        if let Some(conn) = self.conn.as_ref() {
            match bibothek_db::read_all(conn) {
                Ok(books) => {
                    self.books = books;
                    if self.read_failed {
                        self.last_error = None;
                        self.read_failed = false;
                    }
                }
                Err(e) => {
                    log::error!("Failed to read catalog: {}", e);
                    self.last_error = Some(format!("Failed to read catalog: {}", e));
                    self.read_failed = true;
                }
            }
        }
        self.page = PageModel::build(&self.books, &self.selection);
    }

    /// Apply a new sidebar selection. Unchanged selections are ignored.
    pub fn select(&mut self, selection: FilterSelection) {
        if selection != self.selection {
            self.selection = selection;
            self.refresh();
        }
    }

    pub fn reset_filters(&mut self) {
        self.select(FilterSelection::new());
    }

    fn handle_sidebar(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::None => {}
            SidebarAction::Select(selection) => self.select(selection),
            SidebarAction::Reset => self.reset_filters(),
            SidebarAction::Reimport => self.reimport(),
            SidebarAction::ChangeSource(path) => self.set_source(path),
        }
    }
}

impl eframe::App for BibothekApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            views::header::show(ui, self);
        });

        let action = egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(240.0)
            .width_range(180.0..=360.0)
            .show(ctx, |ui| widgets::filter_sidebar::show(ui, self))
            .inner;
        self.handle_sidebar(action);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                views::catalog::show(&mut columns[0], &self.page);
                views::analysis::show(&mut columns[1], &self.page);
            });
        });
    }
}
