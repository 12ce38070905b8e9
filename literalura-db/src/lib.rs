//! SQLite persistence layer for the book catalog.
//!
//! Provides schema creation, inserts and key lookups, and the filtered and
//! sorted scans behind the catalog queries, backed by SQLite (via rusqlite
//! with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, find_author_by_name, find_book_by_title, find_or_create_author,
    get_author_by_id, get_book_by_id, insert_author, insert_book,
};
pub use queries::{
    all_authors_with_books, all_books_with_authors, authors_alive_in_year,
    authors_deceased_in_year, books_by_language, catalog_counts, download_stats,
    search_authors_by_name, top_books_by_downloads,
};
pub use rusqlite::Connection;
pub use schema::{open_database, open_memory};
