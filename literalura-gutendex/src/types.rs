use literalura_catalog::{FetchedAuthor, FetchedBook};
use serde::Deserialize;

/// One page of results from `GET /books/?search=...`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<GutendexBook>,
}

/// A book entry. Only the fields the catalog keeps are decoded.
#[derive(Debug, Deserialize, Clone)]
pub struct GutendexBook {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Person>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub download_count: f64,
}

/// An author, translator or other contributor.
#[derive(Debug, Deserialize, Clone)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

impl From<Person> for FetchedAuthor {
    fn from(p: Person) -> Self {
        FetchedAuthor {
            name: p.name,
            birth_year: p.birth_year,
            death_year: p.death_year,
        }
    }
}

impl From<GutendexBook> for FetchedBook {
    fn from(b: GutendexBook) -> Self {
        FetchedBook {
            title: b.title,
            languages: b.languages,
            download_count: b.download_count,
            authors: b.authors.into_iter().map(FetchedAuthor::from).collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
