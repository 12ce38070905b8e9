//! The contract between the resolver and a remote bibliographic source.

use crate::types::FetchedBook;

/// A remote catalog that can be searched for books.
///
/// Implementations return every candidate the source produced for `term`,
/// in source order; picking the matching candidate is the caller's job.
/// An empty vector means the source had nothing for the term.
pub trait RemoteCatalog {
    type Error: std::error::Error + Send + Sync + 'static;

    fn search(&self, term: &str) -> Result<Vec<FetchedBook>, Self::Error>;
}
