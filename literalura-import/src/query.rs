//! Read-side query engine.
//!
//! Validates user-supplied years and language codes, then dispatches to the
//! store. Holds nothing but a borrowed connection.

use literalura_catalog::{
    Author, Book, CatalogCounts, DownloadStats, InputError, parse_language_code, parse_year,
};
use literalura_db::{OperationError, queries};
use rusqlite::Connection;
use thiserror::Error;

/// Number of books in the default popularity ranking.
pub const DEFAULT_TOP_LIMIT: u32 = 10;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error(transparent)]
    Input(#[from] InputError),
}

impl QueryError {
    /// Whether the error came from user input rather than the store.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

/// Query operations over an open catalog.
pub struct QueryEngine<'a> {
    conn: &'a Connection,
}

impl<'a> QueryEngine<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn books(&self) -> Result<Vec<Book>, QueryError> {
        Ok(queries::all_books_with_authors(self.conn)?)
    }

    pub fn authors(&self) -> Result<Vec<Author>, QueryError> {
        Ok(queries::all_authors_with_books(self.conn)?)
    }

    /// Authors whose name contains `fragment`, ignoring case.
    pub fn search_authors(&self, fragment: &str) -> Result<Vec<Author>, QueryError> {
        Ok(queries::search_authors_by_name(self.conn, fragment.trim())?)
    }

    /// Books available in the language given by `code` (two letters, any case).
    pub fn books_in_language(&self, code: &str) -> Result<Vec<Book>, QueryError> {
        let code = parse_language_code(code)?;
        Ok(queries::books_by_language(self.conn, &code)?)
    }

    /// Authors alive during the four-digit `year`.
    pub fn authors_alive_in(&self, year: &str) -> Result<Vec<Author>, QueryError> {
        let year = parse_year(year)?;
        Ok(queries::authors_alive_in_year(self.conn, year)?)
    }

    /// Authors deceased in or before the four-digit `year`.
    pub fn authors_deceased_in(&self, year: &str) -> Result<Vec<Author>, QueryError> {
        let year = parse_year(year)?;
        Ok(queries::authors_deceased_in_year(self.conn, year)?)
    }

    pub fn top_downloads(&self, limit: u32) -> Result<Vec<Book>, QueryError> {
        Ok(queries::top_books_by_downloads(self.conn, limit)?)
    }

    /// Download statistics, or `None` for an empty catalog.
    pub fn statistics(&self) -> Result<Option<DownloadStats>, QueryError> {
        Ok(queries::download_stats(self.conn)?)
    }

    pub fn counts(&self) -> Result<CatalogCounts, QueryError> {
        Ok(queries::catalog_counts(self.conn)?)
    }
}
