//! Entity resolution for fetched books.
//!
//! A fetched record becomes at most one stored book. Titles and author names
//! are the natural keys: an existing book with the same title is returned
//! untouched, and each embedded author is reused by exact name or created.
//! Resolution of one book runs in a single write transaction.

use literalura_catalog::{
    Author, Book, FetchedAuthor, FetchedBook, NewAuthor, NewBook, RemoteCatalog, bounded,
    decode_languages, encode_languages,
};
use literalura_db::operations::{self, OperationError};
use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Remote catalog error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A fetched book after resolution against the catalog.
#[derive(Debug, Clone)]
pub struct ResolvedBook {
    pub book: Book,
    /// `false` when a book with this title was already stored and returned as-is.
    pub created: bool,
    /// Authors inserted while resolving this book.
    pub authors_created: usize,
}

/// Pick the first candidate whose title contains `term`, ignoring case.
pub fn select_match(candidates: Vec<FetchedBook>, term: &str) -> Option<FetchedBook> {
    let needle = term.trim().to_uppercase();
    candidates
        .into_iter()
        .find(|c| c.title.to_uppercase().contains(&needle))
}

/// Search `source` for `term` and resolve the matching record into the catalog.
///
/// Returns `Ok(None)` when the term is blank or the source has no candidate
/// whose title contains it.
pub fn sync_book<S>(
    conn: &Connection,
    source: &S,
    term: &str,
) -> Result<Option<ResolvedBook>, ImportError>
where
    S: RemoteCatalog + ?Sized,
{
    let term = term.trim();
    if term.is_empty() {
        return Ok(None);
    }

    let candidates = source
        .search(term)
        .map_err(|e| ImportError::Source(Box::new(e)))?;
    log::debug!("{} candidate(s) for '{}'", candidates.len(), term);

    match select_match(candidates, term) {
        Some(fetched) => resolve_book(conn, &fetched).map(Some),
        None => {
            log::debug!("No candidate title contains '{}'", term);
            Ok(None)
        }
    }
}

/// Resolve one fetched book into the catalog.
///
/// Runs in its own `BEGIN IMMEDIATE` transaction and must not be called
/// while another transaction is open on `conn`.
pub fn resolve_book(conn: &Connection, fetched: &FetchedBook) -> Result<ResolvedBook, ImportError> {
    conn.execute_batch("BEGIN IMMEDIATE")?;

    let result = resolve_in_transaction(conn, fetched).and_then(|resolved| {
        conn.execute_batch("COMMIT")?;
        Ok(resolved)
    });

    // A failed COMMIT can leave the transaction open
    if result.is_err() && !conn.is_autocommit() {
        let _ = conn.execute_batch("ROLLBACK");
    }
    result
}

fn resolve_in_transaction(
    conn: &Connection,
    fetched: &FetchedBook,
) -> Result<ResolvedBook, ImportError> {
    // Bounded before the lookup so an oversized title still finds its stored row
    let title = bounded("book title", &fetched.title);

    if let Some(existing) = operations::find_book_by_title(conn, &title)? {
        log::debug!("'{}' is already book #{}", existing.title, existing.id);
        return Ok(ResolvedBook {
            book: existing,
            created: false,
            authors_created: 0,
        });
    }

    let mut author_ids = Vec::with_capacity(fetched.authors.len());
    let mut authors_created = 0;
    for fetched_author in &fetched.authors {
        let (author, created) = resolve_author(conn, fetched_author)?;
        if created {
            authors_created += 1;
        }
        if !author_ids.contains(&author.id) {
            author_ids.push(author.id);
        }
    }

    let new_book = NewBook {
        title,
        languages: bounded_languages(&fetched.languages),
        download_count: fetched.download_count.max(0.0),
        author_ids,
    };
    let book = operations::insert_book(conn, &new_book)?;
    log::debug!(
        "Stored '{}' as book #{} ({} new author(s))",
        book.title,
        book.id,
        authors_created
    );

    Ok(ResolvedBook {
        book,
        created: true,
        authors_created,
    })
}

/// Reuse the stored author with this name, or create it.
fn resolve_author(
    conn: &Connection,
    fetched: &FetchedAuthor,
) -> Result<(Author, bool), ImportError> {
    let new_author = NewAuthor {
        name: bounded("author name", &fetched.name),
        birth_year: fetched.birth_year,
        death_year: fetched.death_year,
    };
    let (author, created) = operations::find_or_create_author(conn, &new_author)?;
    if created {
        log::debug!("Created author #{} '{}'", author.id, author.name);
    }
    Ok((author, created))
}

/// Bound the serialized language list, keeping whatever codes survive the cut.
fn bounded_languages(languages: &[String]) -> Vec<String> {
    decode_languages(&bounded("language list", &encode_languages(languages)))
}
