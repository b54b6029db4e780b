//! Spreadsheet reading and row validation.
//!
//! The source document has a header row followed by one book per row, in the
//! fixed column order title, author, genre, year, age group, language,
//! location. Header names are free text; only the column count is checked.

use std::path::Path;

use bibothek_catalog::{Book, Field};
use calamine::{open_workbook_auto, Data, Reader};

use crate::book_import::ImportError;
use crate::progress::ImportProgress;

/// Number of columns every row must carry.
pub const COLUMN_COUNT: usize = Field::ALL.len();

/// File extensions accepted as a source document, lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv"];

/// Largest magnitude below which every integer is exactly representable
/// as an `f64`.
const EXACT_FLOAT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Source document formats, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetKind {
    /// xlsx, xlsm, xlsb, xls, or ods; the first worksheet is read.
    Workbook,
    Csv,
}

impl SpreadsheetKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SpreadsheetKind::Workbook),
            "csv" => Some(SpreadsheetKind::Csv),
            _ => None,
        }
    }
}

/// Books parsed from a source document.
#[derive(Debug, Default)]
pub struct SheetContents {
    pub books: Vec<Book>,
    /// Data rows seen, blank ones included. The header is not counted.
    pub rows_read: usize,
    pub blank_rows_skipped: usize,
}

/// Parse the spreadsheet at `path` into books.
///
/// Fails if the file is missing, is not a supported format, cannot be
/// decoded, or any row breaks the seven-column layout.
pub fn read_spreadsheet(
    path: &Path,
    progress: Option<&dyn ImportProgress>,
) -> Result<SheetContents, ImportError> {
    if !path.is_file() {
        return Err(ImportError::SourceMissing(path.to_path_buf()));
    }

    let kind = SpreadsheetKind::from_path(path)
        .ok_or_else(|| ImportError::UnsupportedFormat(path.to_path_buf()))?;

    let rows = match kind {
        SpreadsheetKind::Workbook => read_workbook_rows(path)?,
        SpreadsheetKind::Csv => read_csv_rows(path)?,
    };

    parse_rows(rows, progress)
}

fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<String>>, ImportError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::EmptyWorkbook)??;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }
    Ok(rows)
}

/// Cell text as the user typed it. Whole-number floats lose their `.0`,
/// which is how spreadsheet apps store plain years. Floats too large to be
/// exact integers keep their own rendering.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < EXACT_FLOAT_INTEGER => {
            format!("{}", *f as i64)
        }
        other => other.to_string().trim().to_string(),
    }
}

fn parse_rows(
    rows: Vec<Vec<String>>,
    progress: Option<&dyn ImportProgress>,
) -> Result<SheetContents, ImportError> {
    let mut rows = rows.into_iter();

    let header = rows.next().ok_or(ImportError::EmptyWorkbook)?;
    let header_width = trimmed_width(&header);
    if header_width != COLUMN_COUNT {
        return Err(ImportError::ColumnCount {
            row: 1,
            expected: COLUMN_COUNT,
            found: header_width,
        });
    }

    let data: Vec<Vec<String>> = rows.collect();
    let total = data.len();
    let mut contents = SheetContents {
        rows_read: total,
        ..SheetContents::default()
    };

    for (i, cells) in data.into_iter().enumerate() {
        // Spreadsheet row numbers are 1-based and the header is row 1
        let row = i + 2;
        match parse_book(row, &cells)? {
            Some(book) => {
                if let Some(p) = progress {
                    p.on_row(i + 1, total, &book.title);
                }
                contents.books.push(book);
            }
            None => contents.blank_rows_skipped += 1,
        }
    }

    Ok(contents)
}

/// Width of a row ignoring trailing empty cells.
fn trimmed_width(cells: &[String]) -> usize {
    cells
        .iter()
        .rposition(|cell| !cell.is_empty())
        .map_or(0, |last| last + 1)
}

/// Turn one data row into a book. Fully blank rows yield `None`.
fn parse_book(row: usize, cells: &[String]) -> Result<Option<Book>, ImportError> {
    let width = trimmed_width(cells);
    if width == 0 {
        return Ok(None);
    }
    if width > COLUMN_COUNT {
        return Err(ImportError::ColumnCount {
            row,
            expected: COLUMN_COUNT,
            found: width,
        });
    }

    let mut values: [&str; COLUMN_COUNT] = [""; COLUMN_COUNT];
    for field in Field::ALL {
        let value = cells.get(field.index()).map_or("", |c| c.trim());
        if value.is_empty() {
            return Err(ImportError::MissingValue { row, field });
        }
        values[field.index()] = value;
    }

    let year_text = values[Field::Year.index()];
    let year = parse_year(year_text).ok_or_else(|| ImportError::InvalidYear {
        row,
        value: year_text.to_string(),
    })?;

    Ok(Some(Book {
        title: values[Field::Title.index()].to_string(),
        author: values[Field::Author.index()].to_string(),
        genre: values[Field::Genre.index()].to_string(),
        year,
        age_group: values[Field::AgeGroup.index()].to_string(),
        language: values[Field::Language.index()].to_string(),
        location: values[Field::Location.index()].to_string(),
    }))
}

/// Accepts `1965` and `1965.0`; anything else is rejected.
fn parse_year(text: &str) -> Option<i32> {
    if let Ok(year) = text.parse::<i32>() {
        return Some(year);
    }
    let float: f64 = text.parse().ok()?;
    if float.fract() == 0.0 && float >= i32::MIN as f64 && float <= i32::MAX as f64 {
        Some(float as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn year_parsing() {
        assert_eq!(parse_year("1965"), Some(1965));
        assert_eq!(parse_year("1965.0"), Some(1965));
        assert_eq!(parse_year("1965.5"), None);
        assert_eq!(parse_year("nineteen"), None);
        assert_eq!(parse_year("NaN"), None);
    }

    #[test]
    fn trailing_empty_cells_are_ignored() {
        let row = cells(&["Dune", "Herbert", "SciFi", "1965", "Adult", "EN", "ShelfA", "", ""]);
        let book = parse_book(2, &row).unwrap().unwrap();
        assert_eq!(book.location, "ShelfA");
        assert_eq!(trimmed_width(&row), 7);
    }

    #[test]
    fn blank_row_is_skipped() {
        assert!(parse_book(5, &cells(&["", "", ""])).unwrap().is_none());
        assert!(parse_book(5, &[]).unwrap().is_none());
    }

    #[test]
    fn float_cells_render_as_integers() {
        assert_eq!(cell_text(&Data::Float(1969.0)), "1969");
        assert_eq!(cell_text(&Data::Int(2001)), "2001");
        assert_eq!(cell_text(&Data::String("  Shelf B ".to_string())), "Shelf B");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn huge_float_cells_keep_their_value() {
        assert_eq!(cell_text(&Data::Float(1e20)), "100000000000000000000");
        assert_eq!(cell_text(&Data::Float(-1e20)), "-100000000000000000000");
        assert_eq!(cell_text(&Data::Float(9_007_199_254_740_991.0)), "9007199254740991");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
    }

    #[test]
    fn kind_from_extension() {
        assert_eq!(
            SpreadsheetKind::from_path(Path::new("book_data.xlsx")),
            Some(SpreadsheetKind::Workbook)
        );
        assert_eq!(
            SpreadsheetKind::from_path(Path::new("BOOKS.CSV")),
            Some(SpreadsheetKind::Csv)
        );
        assert_eq!(SpreadsheetKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(SpreadsheetKind::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn every_supported_extension_is_readable() {
        for ext in SUPPORTED_EXTENSIONS {
            let path = format!("book_data.{}", ext);
            assert!(
                SpreadsheetKind::from_path(Path::new(&path)).is_some(),
                "{} is advertised but not read",
                ext
            );
        }
    }
}
