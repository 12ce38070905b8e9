use literalura_db::open_memory;
use literalura_db::schema::{CURRENT_VERSION, SchemaError, create_schema, open_database};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    for table in ["schema_version", "authors", "books", "book_authors"] {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "Table '{}' should exist", table);
    }
}

#[test]
fn author_names_are_unique() {
    let conn = open_memory().unwrap();
    conn.execute("INSERT INTO authors (name) VALUES ('Austen, Jane')", [])
        .unwrap();
    let dup = conn.execute("INSERT INTO authors (name) VALUES ('Austen, Jane')", []);
    assert!(dup.is_err());
    // Case-sensitive: a differently cased name is a different author
    conn.execute("INSERT INTO authors (name) VALUES ('austen, jane')", [])
        .unwrap();
}

#[test]
fn oversized_columns_are_rejected() {
    let conn = open_memory().unwrap();
    let long = "t".repeat(256);
    let result = conn.execute("INSERT INTO books (title) VALUES (?1)", [&long]);
    assert!(result.is_err());
}

#[test]
fn negative_download_count_is_rejected() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO books (title, download_count) VALUES ('Emma', -1.0)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn reopen_on_disk_database_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute("INSERT INTO authors (name) VALUES ('Shelley, Mary')", [])
            .unwrap();
    }
    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM authors", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn newer_schema_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }
    match open_database(&path) {
        Err(SchemaError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, CURRENT_VERSION);
            assert_eq!(found, CURRENT_VERSION + 1);
        }
        other => panic!("expected version mismatch, got {:?}", other.map(|_| ())),
    }
}
