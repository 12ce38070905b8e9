//! Inserts and single-entity lookups for authors and books.

use literalura_catalog::{Author, Book, NewAuthor, NewBook, encode_languages};
use rusqlite::{Connection, params};
use thiserror::Error;

use crate::queries::{AUTHOR_COLUMNS, BOOK_COLUMNS, attach_authors, attach_books, row_to_author, row_to_book};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

// ── Author Operations ───────────────────────────────────────────────────────

/// Insert a new author. Returns the stored author with its assigned id.
///
/// Fails with a constraint error if the name is already taken; use
/// [`find_or_create_author`] when the name may exist.
pub fn insert_author(conn: &Connection, author: &NewAuthor) -> Result<Author, OperationError> {
    conn.execute(
        "INSERT INTO authors (name, birth_year, death_year) VALUES (?1, ?2, ?3)",
        params![author.name, author.birth_year, author.death_year],
    )?;
    Ok(Author {
        id: conn.last_insert_rowid(),
        name: author.name.clone(),
        birth_year: author.birth_year,
        death_year: author.death_year,
        books: Vec::new(),
    })
}

/// Find an author by exact, case-sensitive name, with their books.
pub fn find_author_by_name(conn: &Connection, name: &str) -> Result<Option<Author>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {AUTHOR_COLUMNS} FROM authors WHERE name = ?1 LIMIT 1"
    ))?;
    let result = stmt.query_row(params![name], row_to_author);
    match result {
        Ok(author) => with_books(conn, author).map(Some),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Get an author by id, with their books.
pub fn get_author_by_id(conn: &Connection, id: i64) -> Result<Option<Author>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = ?1"))?;
    let result = stmt.query_row(params![id], row_to_author);
    match result {
        Ok(author) => with_books(conn, author).map(Some),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Return the author stored under `author.name`, creating it if absent.
///
/// The insert and the lookup are a single conflict-free unit against the
/// unique name column: when two callers race on the same new name, one
/// inserts and both read back the same row. The flag is `true` when this
/// call created the row. Existing rows are returned as stored; the years in
/// `author` are not applied to them.
pub fn find_or_create_author(
    conn: &Connection,
    author: &NewAuthor,
) -> Result<(Author, bool), OperationError> {
    let inserted = conn.execute(
        "INSERT INTO authors (name, birth_year, death_year) VALUES (?1, ?2, ?3)
         ON CONFLICT(name) DO NOTHING",
        params![author.name, author.birth_year, author.death_year],
    )?;
    let stored = find_author_by_name(conn, &author.name)?.ok_or_else(|| OperationError::NotFound {
        entity_type: "author".to_string(),
        id: author.name.clone(),
    })?;
    Ok((stored, inserted == 1))
}

// ── Book Operations ─────────────────────────────────────────────────────────

/// Insert a new book and link it to its authors, in order. Returns the
/// stored book with its authors materialized.
///
/// The book row and its links are separate statements; callers that need
/// them to land together run this inside a transaction.
pub fn insert_book(conn: &Connection, book: &NewBook) -> Result<Book, OperationError> {
    conn.execute(
        "INSERT INTO books (title, languages, download_count) VALUES (?1, ?2, ?3)",
        params![book.title, encode_languages(&book.languages), book.download_count],
    )?;
    let id = conn.last_insert_rowid();

    for (position, author_id) in book.author_ids.iter().enumerate() {
        conn.execute(
            "INSERT OR IGNORE INTO book_authors (book_id, author_id, position) VALUES (?1, ?2, ?3)",
            params![id, author_id, position as i64],
        )?;
    }

    get_book_by_id(conn, id)?.ok_or_else(|| OperationError::NotFound {
        entity_type: "book".to_string(),
        id: id.to_string(),
    })
}

/// Find a book by exact title, with its authors.
pub fn find_book_by_title(conn: &Connection, title: &str) -> Result<Option<Book>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {BOOK_COLUMNS} FROM books WHERE title = ?1 LIMIT 1"
    ))?;
    let result = stmt.query_row(params![title], row_to_book);
    match result {
        Ok(book) => with_authors(conn, book).map(Some),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Get a book by id, with its authors.
pub fn get_book_by_id(conn: &Connection, id: i64) -> Result<Option<Book>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?1"))?;
    let result = stmt.query_row(params![id], row_to_book);
    match result {
        Ok(book) => with_authors(conn, book).map(Some),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn with_books(conn: &Connection, author: Author) -> Result<Author, OperationError> {
    let mut authors = vec![author];
    attach_books(conn, &mut authors)?;
    Ok(authors.remove(0))
}

fn with_authors(conn: &Connection, book: Book) -> Result<Book, OperationError> {
    let mut books = vec![book];
    attach_authors(conn, &mut books)?;
    Ok(books.remove(0))
}
