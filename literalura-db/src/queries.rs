//! Read queries for the catalog database.
//!
//! Every list query materializes both sides of the book/author relationship
//! before returning: rows are loaded first, then one join over `book_authors`
//! per batch of ids fills in the links.

use std::collections::HashMap;

use literalura_catalog::{
    Author, AuthorRef, Book, BookRef, CatalogCounts, DownloadStats, decode_languages,
};
use rusqlite::{Connection, params, params_from_iter};

use crate::operations::OperationError;

pub(crate) const AUTHOR_COLUMNS: &str = "id, name, birth_year, death_year";
pub(crate) const BOOK_COLUMNS: &str = "id, title, languages, download_count";

/// Ids bound per `IN (...)` clause when loading links.
const ID_BATCH: usize = 500;

// ── Author Queries ──────────────────────────────────────────────────────────

/// Search authors whose name contains `fragment`, ignoring case.
///
/// Case folding happens in Rust; SQLite's `LOWER` only folds ASCII.
pub fn search_authors_by_name(
    conn: &Connection,
    fragment: &str,
) -> Result<Vec<Author>, OperationError> {
    let needle = fragment.to_lowercase();
    let mut stmt = conn.prepare(&format!(
        "SELECT {AUTHOR_COLUMNS} FROM authors ORDER BY name, id"
    ))?;
    let rows = stmt.query_map([], row_to_author)?;
    let mut authors = Vec::new();
    for row in rows {
        let author = row?;
        if author.name.to_lowercase().contains(&needle) {
            authors.push(author);
        }
    }
    attach_books(conn, &mut authors)?;
    Ok(authors)
}

/// List every author with their books.
pub fn all_authors_with_books(conn: &Connection) -> Result<Vec<Author>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {AUTHOR_COLUMNS} FROM authors ORDER BY name, id"
    ))?;
    let rows = stmt.query_map([], row_to_author)?;
    let mut authors = rows.collect::<Result<Vec<_>, _>>()?;
    attach_books(conn, &mut authors)?;
    Ok(authors)
}

/// Authors alive during `year`: born in or before it, and either still alive
/// or deceased after it. Authors without a birth year are never included.
pub fn authors_alive_in_year(conn: &Connection, year: i32) -> Result<Vec<Author>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {AUTHOR_COLUMNS} FROM authors
         WHERE birth_year IS NOT NULL AND birth_year <= ?1
           AND (death_year IS NULL OR death_year > ?1)
         ORDER BY birth_year, name, id"
    ))?;
    let rows = stmt.query_map(params![year], row_to_author)?;
    let mut authors = rows.collect::<Result<Vec<_>, _>>()?;
    attach_books(conn, &mut authors)?;
    Ok(authors)
}

/// Authors deceased in or before `year`. Authors missing a birth year are
/// treated as incomplete and excluded.
pub fn authors_deceased_in_year(
    conn: &Connection,
    year: i32,
) -> Result<Vec<Author>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {AUTHOR_COLUMNS} FROM authors
         WHERE death_year IS NOT NULL AND death_year <= ?1
           AND birth_year IS NOT NULL
         ORDER BY death_year, name, id"
    ))?;
    let rows = stmt.query_map(params![year], row_to_author)?;
    let mut authors = rows.collect::<Result<Vec<_>, _>>()?;
    attach_books(conn, &mut authors)?;
    Ok(authors)
}

// ── Book Queries ────────────────────────────────────────────────────────────

/// List every book with its authors, in insertion order.
pub fn all_books_with_authors(conn: &Connection) -> Result<Vec<Book>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {BOOK_COLUMNS} FROM books ORDER BY id"))?;
    let rows = stmt.query_map([], row_to_book)?;
    let mut books = rows.collect::<Result<Vec<_>, _>>()?;
    attach_authors(conn, &mut books)?;
    Ok(books)
}

/// Books whose language list contains exactly `code`.
///
/// Matches whole list entries: the stored column is wrapped in separators
/// so that `"n"` never matches `"en"`.
pub fn books_by_language(conn: &Connection, code: &str) -> Result<Vec<Book>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {BOOK_COLUMNS} FROM books
         WHERE instr(',' || REPLACE(languages, ' ', '') || ',', ',' || ?1 || ',') > 0
         ORDER BY id"
    ))?;
    let rows = stmt.query_map(params![code], row_to_book)?;
    let mut books = rows.collect::<Result<Vec<_>, _>>()?;
    attach_authors(conn, &mut books)?;
    Ok(books)
}

/// The `limit` most downloaded books, highest first. Equal counts keep
/// insertion order.
pub fn top_books_by_downloads(conn: &Connection, limit: u32) -> Result<Vec<Book>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {BOOK_COLUMNS} FROM books ORDER BY download_count DESC, id ASC LIMIT ?1"
    ))?;
    let rows = stmt.query_map(params![limit], row_to_book)?;
    let mut books = rows.collect::<Result<Vec<_>, _>>()?;
    attach_authors(conn, &mut books)?;
    Ok(books)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Count, sum, minimum and maximum of download counts, or `None` when the
/// catalog has no books.
pub fn download_stats(conn: &Connection) -> Result<Option<DownloadStats>, OperationError> {
    let (count, sum, min, max): (i64, f64, Option<f64>, Option<f64>) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(download_count), 0.0), MIN(download_count), MAX(download_count)
         FROM books",
        [],
        |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
    )?;

    Ok(match (min, max) {
        (Some(min), Some(max)) if count > 0 => Some(DownloadStats {
            count: count as u64,
            sum,
            min,
            max,
        }),
        _ => None,
    })
}

/// Get row counts for the catalog tables.
pub fn catalog_counts(conn: &Connection) -> Result<CatalogCounts, OperationError> {
    let authors: i64 = conn.query_row("SELECT COUNT(*) FROM authors", [], |r| r.get(0))?;
    let books: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |r| r.get(0))?;
    let links: i64 = conn.query_row("SELECT COUNT(*) FROM book_authors", [], |r| r.get(0))?;

    Ok(CatalogCounts {
        authors,
        books,
        links,
    })
}

// ── Relationship Loading ────────────────────────────────────────────────────

/// Fill `books` on each author from `book_authors`.
pub(crate) fn attach_books(conn: &Connection, authors: &mut [Author]) -> Result<(), OperationError> {
    if authors.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = authors.iter().map(|a| a.id).collect();
    let mut by_author: HashMap<i64, Vec<BookRef>> = HashMap::new();

    for batch in ids.chunks(ID_BATCH) {
        let mut stmt = conn.prepare(&format!(
            "SELECT ba.author_id, b.id, b.title
             FROM book_authors ba JOIN books b ON b.id = ba.book_id
             WHERE ba.author_id IN ({})
             ORDER BY ba.author_id, b.id",
            placeholders(batch.len())
        ))?;
        let rows = stmt.query_map(params_from_iter(batch.iter()), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                BookRef {
                    id: row.get(1)?,
                    title: row.get(2)?,
                },
            ))
        })?;
        for row in rows {
            let (author_id, book) = row?;
            by_author.entry(author_id).or_default().push(book);
        }
    }

    for author in authors.iter_mut() {
        author.books = by_author.remove(&author.id).unwrap_or_default();
    }
    Ok(())
}

/// Fill `authors` on each book from `book_authors`, in listing order.
pub(crate) fn attach_authors(conn: &Connection, books: &mut [Book]) -> Result<(), OperationError> {
    if books.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
    let mut by_book: HashMap<i64, Vec<AuthorRef>> = HashMap::new();

    for batch in ids.chunks(ID_BATCH) {
        let mut stmt = conn.prepare(&format!(
            "SELECT ba.book_id, a.id, a.name, a.birth_year, a.death_year
             FROM book_authors ba JOIN authors a ON a.id = ba.author_id
             WHERE ba.book_id IN ({})
             ORDER BY ba.book_id, ba.position, a.id",
            placeholders(batch.len())
        ))?;
        let rows = stmt.query_map(params_from_iter(batch.iter()), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                AuthorRef {
                    id: row.get(1)?,
                    name: row.get(2)?,
                    birth_year: row.get(3)?,
                    death_year: row.get(4)?,
                },
            ))
        })?;
        for row in rows {
            let (book_id, author) = row?;
            by_book.entry(book_id).or_default().push(author);
        }
    }

    for book in books.iter_mut() {
        book.authors = by_book.remove(&book.id).unwrap_or_default();
    }
    Ok(())
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

pub(crate) fn row_to_author(row: &rusqlite::Row<'_>) -> rusqlite::Result<Author> {
    Ok(Author {
        id: row.get(0)?,
        name: row.get(1)?,
        birth_year: row.get(2)?,
        death_year: row.get(3)?,
        books: Vec::new(),
    })
}

pub(crate) fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    let languages: String = row.get(2)?;
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        languages: decode_languages(&languages),
        download_count: row.get(3)?,
        authors: Vec::new(),
    })
}
