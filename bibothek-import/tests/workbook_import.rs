use std::path::{Path, PathBuf};

use bibothek_catalog::Book;
use bibothek_db::*;
use bibothek_import::*;
use rust_xlsxwriter::Workbook;

const HEADER: [&str; 7] = [
    "Title",
    "Author",
    "Genre",
    "Year",
    "Age group",
    "Language",
    "Location",
];

/// Writes a workbook whose first sheet holds the header, two books with
/// numeric year cells, and a blank row between them. A second sheet holds
/// unrelated notes.
fn write_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("book_data.xlsx");
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    for (col, label) in HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *label).unwrap();
    }

    let rows: [(u32, [&str; 6], f64); 2] = [
        (1, ["Dune", "Herbert", "SciFi", "Adult", "EN", "ShelfA"], 1965.0),
        (3, ["Momo", "Ende", "Fantasy", "Children", "DE", "Grandparents"], 1973.0),
    ];
    for (row, [title, author, genre, age_group, language, location], year) in rows {
        sheet.write_string(row, 0, title).unwrap();
        sheet.write_string(row, 1, author).unwrap();
        sheet.write_string(row, 2, genre).unwrap();
        sheet.write_number(row, 3, year).unwrap();
        sheet.write_string(row, 4, age_group).unwrap();
        sheet.write_string(row, 5, language).unwrap();
        sheet.write_string(row, 6, location).unwrap();
    }
    // Stray whitespace past the last column widens the used range
    sheet.write_string(3, 8, "  ").unwrap();

    let notes = workbook.add_worksheet();
    notes.write_string(0, 0, "Not part of the catalog").unwrap();

    workbook.save(&path).unwrap();
    path
}

fn book(
    title: &str,
    author: &str,
    genre: &str,
    year: i32,
    age_group: &str,
    language: &str,
    location: &str,
) -> Book {
    Book {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        year,
        age_group: age_group.to_string(),
        language: language.to_string(),
        location: location.to_string(),
    }
}

#[test]
fn reads_first_worksheet_of_xlsx() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_workbook(dir.path());

    let contents = read_spreadsheet(&source, None).unwrap();
    assert_eq!(contents.rows_read, 3);
    assert_eq!(contents.blank_rows_skipped, 1);
    assert_eq!(
        contents.books,
        vec![
            book("Dune", "Herbert", "SciFi", 1965, "Adult", "EN", "ShelfA"),
            book("Momo", "Ende", "Fantasy", 1973, "Children", "DE", "Grandparents"),
        ]
    );
}

#[test]
fn import_xlsx_replaces_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_workbook(dir.path());
    let conn = open_memory().unwrap();
    let mut session = ImportSession::new();

    let outcome = session
        .import_once(&conn, &source, Some(&SilentProgress))
        .unwrap();
    assert_eq!(
        outcome,
        ImportOutcome::Imported(ImportStats {
            rows_read: 3,
            blank_rows_skipped: 1,
            books_stored: 2,
        })
    );

    let stored = read_all(&conn).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].title, "Dune");
    assert_eq!(stored[0].year, 1965);
    assert_eq!(stored[1].location, "Grandparents");
}
