//! Field bounds and user input parsing.
//!
//! Text fields are bounded to [`MAX_FIELD_LEN`] characters before they reach
//! the store. Oversized values are cut silently; the cut is logged because it
//! loses data.

use std::borrow::Cow;

use thiserror::Error;

/// Maximum stored length, in characters, of author names, book titles and
/// serialized language lists.
pub const MAX_FIELD_LEN: usize = 255;

/// Malformed query input, rejected before any store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid year '{0}': expected four digits")]
    MalformedYear(String),
    #[error("Invalid language code '{0}': expected two letters")]
    MalformedLanguage(String),
}

/// Return the first `max_len` characters of `text`, or `text` unchanged if it
/// already fits. Length is counted in characters, not bytes.
pub fn truncate(text: &str, max_len: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_len) {
        Some((byte_idx, _)) => Cow::Owned(text[..byte_idx].to_string()),
        None => Cow::Borrowed(text),
    }
}

/// Bound a named field to [`MAX_FIELD_LEN`], logging when data is dropped.
pub fn bounded(field: &str, text: &str) -> String {
    match truncate(text, MAX_FIELD_LEN) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => {
            log::warn!(
                "Truncated {field} from {} to {MAX_FIELD_LEN} characters: '{s}'",
                text.chars().count(),
            );
            s
        }
    }
}

/// Parse a year typed by the user. Exactly four ASCII digits are accepted
/// (surrounding whitespace is ignored).
pub fn parse_year(input: &str) -> Result<i32, InputError> {
    let trimmed = input.trim();
    if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::MalformedYear(trimmed.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| InputError::MalformedYear(trimmed.to_string()))
}

/// Parse a language code typed by the user into its lowercase two-letter form.
pub fn parse_language_code(input: &str) -> Result<String, InputError> {
    let code = input.trim().to_lowercase();
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase()) {
        Ok(code)
    } else {
        Err(InputError::MalformedLanguage(input.trim().to_string()))
    }
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
