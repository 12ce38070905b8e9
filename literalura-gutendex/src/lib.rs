//! Client for the Gutendex API, a JSON index of Project Gutenberg books.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GutendexClient};
pub use error::GutendexError;
pub use types::{GutendexBook, Person, SearchResponse};
