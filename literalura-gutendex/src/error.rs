/// Errors that can occur while querying Gutendex.
#[derive(Debug, thiserror::Error)]
pub enum GutendexError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status}) for {url}")]
    ServerError { status: u16, url: String },

    #[error("Failed to parse Gutendex response: {message}. Response: {snippet}")]
    Parse { message: String, snippet: String },
}
