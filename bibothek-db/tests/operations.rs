use bibothek_catalog::{Book, Field};
use bibothek_db::*;
use rusqlite::{Connection, OpenFlags};

fn book(title: &str, year: i32, location: &str) -> Book {
    Book {
        title: title.to_string(),
        author: "Herbert".to_string(),
        genre: "SciFi".to_string(),
        year,
        age_group: "Adult".to_string(),
        language: "EN".to_string(),
        location: location.to_string(),
    }
}

fn dune_catalog() -> Vec<Book> {
    vec![
        book("Dune", 1965, "ShelfA"),
        book("Dune Messiah", 1969, "ShelfB"),
    ]
}

#[test]
fn empty_catalog_reads_nothing() {
    let conn = open_memory().unwrap();
    assert!(read_all(&conn).unwrap().is_empty());
    assert_eq!(count_books(&conn).unwrap(), 0);
}

#[test]
fn replace_and_read_back() {
    let conn = open_memory().unwrap();
    let stored = replace_all(&conn, &dune_catalog()).unwrap();
    assert_eq!(stored, 2);

    assert_eq!(read_all(&conn).unwrap(), dune_catalog());
    assert_eq!(count_books(&conn).unwrap(), 2);
}

#[test]
fn replace_discards_previous_contents() {
    let conn = open_memory().unwrap();
    replace_all(&conn, &dune_catalog()).unwrap();

    let next = vec![book("Children of Dune", 1976, "Grandma")];
    replace_all(&conn, &next).unwrap();

    assert_eq!(read_all(&conn).unwrap(), next);
}

#[test]
fn replace_restarts_id_sequence() {
    let conn = open_memory().unwrap();
    replace_all(&conn, &dune_catalog()).unwrap();
    replace_all(&conn, &dune_catalog()).unwrap();

    let ids: Vec<i64> = conn
        .prepare("SELECT id FROM books ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn read_all_keeps_insertion_order() {
    let conn = open_memory().unwrap();
    let books = vec![
        book("Zeta", 2000, "A"),
        book("Alpha", 1990, "B"),
        book("Mid", 1995, "C"),
    ];
    replace_all(&conn, &books).unwrap();
    let titles: Vec<_> = read_all(&conn).unwrap().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn empty_field_is_rejected_and_nothing_changes() {
    let conn = open_memory().unwrap();
    replace_all(&conn, &dune_catalog()).unwrap();

    let mut broken = dune_catalog();
    broken[1].location = String::new();
    let err = replace_all(&conn, &broken).unwrap_err();
    assert!(matches!(err, StorageError::EmptyField { field: Field::Location, .. }));

    assert_eq!(read_all(&conn).unwrap(), dune_catalog());
}

#[test]
fn read_only_medium_fails_and_keeps_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book_data.db");
    let writer = open_database(&path).unwrap();
    replace_all(&writer, &dune_catalog()).unwrap();

    let reader = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY).unwrap();
    let err = replace_all(&reader, &[book("Other", 2000, "X")]).unwrap_err();
    assert!(matches!(err, StorageError::Sqlite(_)));

    assert_eq!(read_all(&writer).unwrap(), dune_catalog());
}

#[test]
fn missing_table_is_storage_error() {
    let conn = Connection::open_in_memory().unwrap();
    assert!(matches!(read_all(&conn), Err(StorageError::Sqlite(_))));
    assert!(count_books(&conn).is_err());
}
