//! Synchronize remote search results into the catalog and query it.
//!
//! This crate owns the catalog's write-side logic (resolving fetched books
//! and their authors against stored rows without duplicating them) and the
//! read-side query engine that validates user input before it reaches the
//! store.

pub mod query;
pub mod sync;

pub use query::{DEFAULT_TOP_LIMIT, QueryEngine, QueryError};
pub use sync::{ImportError, ResolvedBook, resolve_book, select_match, sync_book};
