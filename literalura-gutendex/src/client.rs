use std::time::Duration;

use literalura_catalog::{FetchedBook, RemoteCatalog};

use crate::error::GutendexError;
use crate::types::SearchResponse;

pub const DEFAULT_BASE_URL: &str = "https://gutendex.com/books/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for the Gutendex search endpoint.
pub struct GutendexClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl GutendexClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GutendexError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("literalura/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first page of results for a free-text search.
    pub fn search_books(&self, term: &str) -> Result<SearchResponse, GutendexError> {
        log::debug!("GET {}?search={}", self.base_url, term);

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("search", term)])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GutendexError::ServerError {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        let text = resp.text()?;
        let response = parse_search_response(&text)?;
        log::debug!(
            "Gutendex returned {} result(s) of {} total",
            response.results.len(),
            response.count
        );
        Ok(response)
    }
}

impl RemoteCatalog for GutendexClient {
    type Error = GutendexError;

    fn search(&self, term: &str) -> Result<Vec<FetchedBook>, GutendexError> {
        let response = self.search_books(term)?;
        Ok(response.results.into_iter().map(FetchedBook::from).collect())
    }
}

/// Decode a search response body.
pub(crate) fn parse_search_response(text: &str) -> Result<SearchResponse, GutendexError> {
    serde_json::from_str(text).map_err(|e| GutendexError::Parse {
        message: e.to_string(),
        snippet: text.chars().take(200).collect(),
    })
}
