//! Data model types for the book catalog.
//!
//! Stored entities ([`Author`], [`Book`]) carry their surrogate ids and the
//! other side of the many-to-many relationship, fully materialized. Insert
//! payloads ([`NewAuthor`], [`NewBook`]) have no id yet. Fetched records
//! ([`FetchedBook`], [`FetchedAuthor`]) are transient values from the remote
//! source that have not been resolved against the store.

// ── Author ──────────────────────────────────────────────────────────────────

/// A stored author with the books linked to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub books: Vec<BookRef>,
}

impl Author {
    /// Titles of the linked books, in link order.
    pub fn book_titles(&self) -> Vec<&str> {
        self.books.iter().map(|b| b.title.as_str()).collect()
    }
}

/// An author row to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

/// The author side of a book's author list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub id: i64,
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

// ── Book ────────────────────────────────────────────────────────────────────

/// A stored book with its authors.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    /// Two-letter language codes, in the order the source listed them.
    pub languages: Vec<String>,
    pub download_count: f64,
    pub authors: Vec<AuthorRef>,
}

impl Book {
    /// Author names joined for display, e.g. `"Austen, Jane, Doe, John"`.
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l == code)
    }
}

/// A book row to be inserted, linked to already-stored authors.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub languages: Vec<String>,
    pub download_count: f64,
    /// Ids of stored authors, in the order they should be listed.
    pub author_ids: Vec<i64>,
}

/// The book side of an author's book list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRef {
    pub id: i64,
    pub title: String,
}

// ── Fetched records ─────────────────────────────────────────────────────────

/// A book record as returned by a remote catalog, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedBook {
    pub title: String,
    pub languages: Vec<String>,
    pub download_count: f64,
    pub authors: Vec<FetchedAuthor>,
}

/// An author embedded in a [`FetchedBook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedAuthor {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Descriptive statistics over the download counts of all stored books.
///
/// Only constructed for a non-empty catalog, so `min` and `max` are always
/// real values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DownloadStats {
    pub count: u64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
}

impl DownloadStats {
    pub fn average(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Row counts for the catalog tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub authors: i64,
    pub books: i64,
    pub links: i64,
}
