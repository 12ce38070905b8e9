//! Book catalog data model types, field validation, and the remote source contract.
//!
//! This crate defines the catalog's entities without any database or HTTP
//! dependencies. `literalura-db` persists these types, `literalura-gutendex`
//! produces [`FetchedBook`] records, and `literalura-import` ties the two
//! together.

pub mod languages;
pub mod source;
pub mod types;
pub mod validate;

pub use languages::{KNOWN_LANGUAGES, Language, decode_languages, encode_languages, language_name};
pub use source::RemoteCatalog;
pub use types::*;
pub use validate::{InputError, MAX_FIELD_LEN, bounded, parse_language_code, parse_year, truncate};
