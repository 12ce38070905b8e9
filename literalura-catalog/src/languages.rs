//! Language codes: the table shown to users and the stored list encoding.

/// A language offered in the language filter prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages listed by the language prompt. Any two-letter code is still
/// accepted as a filter.
pub const KNOWN_LANGUAGES: &[Language] = &[
    Language { code: "es", name: "Spanish" },
    Language { code: "it", name: "Italian" },
    Language { code: "en", name: "English" },
    Language { code: "fr", name: "French" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "zh", name: "Mandarin Chinese" },
    Language { code: "ja", name: "Japanese" },
];

/// Display name for a known code.
pub fn language_name(code: &str) -> Option<&'static str> {
    KNOWN_LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.name)
}

const SEPARATOR: char = ',';

/// Serialize a language list into its single stored column.
pub fn encode_languages(languages: &[String]) -> String {
    let mut out = String::new();
    for (i, code) in languages.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(code.trim());
    }
    out
}

/// Decode the stored column back into an ordered list. Empty segments are dropped.
pub fn decode_languages(stored: &str) -> Vec<String> {
    stored
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_joins_in_order() {
        let langs = vec!["en".to_string(), "fr".to_string(), "de".to_string()];
        assert_eq!(encode_languages(&langs), "en,fr,de");
    }

    #[test]
    fn decode_ignores_blank_segments() {
        assert_eq!(decode_languages("en, fr,,"), vec!["en", "fr"]);
        assert!(decode_languages("").is_empty());
    }

    #[test]
    fn known_language_names() {
        assert_eq!(language_name("pt"), Some("Portuguese"));
        assert_eq!(language_name("xx"), None);
    }
}
