use literalura_catalog::*;
use literalura_db::*;

fn austen() -> NewAuthor {
    NewAuthor {
        name: "Austen, Jane".to_string(),
        birth_year: Some(1775),
        death_year: Some(1817),
    }
}

fn book(title: &str, languages: &[&str], downloads: f64, author_ids: Vec<i64>) -> NewBook {
    NewBook {
        title: title.to_string(),
        languages: languages.iter().map(|l| l.to_string()).collect(),
        download_count: downloads,
        author_ids,
    }
}

#[test]
fn insert_author_assigns_id() {
    let conn = open_memory().unwrap();
    let author = insert_author(&conn, &austen()).unwrap();
    assert!(author.id > 0);
    assert_eq!(author.name, "Austen, Jane");
    assert!(author.books.is_empty());
}

#[test]
fn find_author_by_name_is_exact() {
    let conn = open_memory().unwrap();
    insert_author(&conn, &austen()).unwrap();

    let found = find_author_by_name(&conn, "Austen, Jane").unwrap().unwrap();
    assert_eq!(found.birth_year, Some(1775));
    assert_eq!(found.death_year, Some(1817));

    assert!(find_author_by_name(&conn, "austen, jane").unwrap().is_none());
    assert!(find_author_by_name(&conn, "Austen").unwrap().is_none());
}

#[test]
fn find_or_create_author_creates_once() {
    let conn = open_memory().unwrap();
    let (first, created) = find_or_create_author(&conn, &austen()).unwrap();
    assert!(created);

    let (second, created) = find_or_create_author(&conn, &austen()).unwrap();
    assert!(!created);
    assert_eq!(first.id, second.id);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM authors", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn find_or_create_author_keeps_stored_years() {
    let conn = open_memory().unwrap();
    find_or_create_author(&conn, &austen()).unwrap();

    let conflicting = NewAuthor {
        birth_year: None,
        death_year: Some(1900),
        ..austen()
    };
    let (stored, created) = find_or_create_author(&conn, &conflicting).unwrap();
    assert!(!created);
    assert_eq!(stored.birth_year, Some(1775));
    assert_eq!(stored.death_year, Some(1817));
}

#[test]
fn find_or_create_author_sees_concurrent_insert() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    let a = open_database(&path).unwrap();
    let b = open_database(&path).unwrap();

    // Both sessions miss the lookup before either creates the author
    assert!(find_author_by_name(&a, "Austen, Jane").unwrap().is_none());
    assert!(find_author_by_name(&b, "Austen, Jane").unwrap().is_none());

    let (from_a, created_a) = find_or_create_author(&a, &austen()).unwrap();
    let (from_b, created_b) = find_or_create_author(&b, &austen()).unwrap();
    assert!(created_a);
    assert!(!created_b);
    assert_eq!(from_a.id, from_b.id);
}

#[test]
fn insert_book_links_authors_both_ways() {
    let conn = open_memory().unwrap();
    let jane = insert_author(&conn, &austen()).unwrap();
    let stored = insert_book(&conn, &book("Emma", &["en"], 1200.0, vec![jane.id])).unwrap();

    assert!(stored.id > 0);
    assert_eq!(stored.title, "Emma");
    assert_eq!(stored.languages, vec!["en"]);
    assert_eq!(stored.download_count, 1200.0);
    assert_eq!(stored.authors.len(), 1);
    assert_eq!(stored.authors[0].id, jane.id);

    let jane = get_author_by_id(&conn, jane.id).unwrap().unwrap();
    assert_eq!(jane.book_titles(), vec!["Emma"]);
}

#[test]
fn insert_book_preserves_author_order() {
    let conn = open_memory().unwrap();
    let second = insert_author(
        &conn,
        &NewAuthor {
            name: "Zola, Émile".to_string(),
            birth_year: Some(1840),
            death_year: Some(1902),
        },
    )
    .unwrap();
    let first = insert_author(&conn, &austen()).unwrap();

    let stored = insert_book(
        &conn,
        &book("Anthology", &["en", "fr"], 3.0, vec![second.id, first.id]),
    )
    .unwrap();
    let names: Vec<&str> = stored.authors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Zola, Émile", "Austen, Jane"]);
    assert_eq!(stored.author_names(), "Zola, Émile, Austen, Jane");
}

#[test]
fn insert_book_ignores_repeated_author_id() {
    let conn = open_memory().unwrap();
    let jane = insert_author(&conn, &austen()).unwrap();
    let stored = insert_book(&conn, &book("Emma", &["en"], 1.0, vec![jane.id, jane.id])).unwrap();
    assert_eq!(stored.authors.len(), 1);
}

#[test]
fn insert_book_with_duplicate_title_fails() {
    let conn = open_memory().unwrap();
    insert_book(&conn, &book("Emma", &["en"], 1.0, vec![])).unwrap();
    let dup = insert_book(&conn, &book("Emma", &["fr"], 2.0, vec![]));
    assert!(matches!(dup, Err(OperationError::Sqlite(_))));
}

#[test]
fn find_book_by_title() {
    let conn = open_memory().unwrap();
    let jane = insert_author(&conn, &austen()).unwrap();
    insert_book(&conn, &book("Persuasion", &["en", "fr"], 88.0, vec![jane.id])).unwrap();

    let found = literalura_db::find_book_by_title(&conn, "Persuasion")
        .unwrap()
        .unwrap();
    assert_eq!(found.languages, vec!["en", "fr"]);
    assert!(found.has_language("fr"));
    assert_eq!(found.authors[0].name, "Austen, Jane");

    assert!(literalura_db::find_book_by_title(&conn, "persuasion")
        .unwrap()
        .is_none());
}

#[test]
fn get_missing_ids() {
    let conn = open_memory().unwrap();
    assert!(get_book_by_id(&conn, 42).unwrap().is_none());
    assert!(get_author_by_id(&conn, 42).unwrap().is_none());
}
