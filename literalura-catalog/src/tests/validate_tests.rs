use super::*;

#[test]
fn truncate_leaves_short_text_borrowed() {
    let out = truncate("Frankenstein", 255);
    assert!(matches!(out, Cow::Borrowed("Frankenstein")));
}

#[test]
fn truncate_at_exact_limit_is_unchanged() {
    let text = "a".repeat(255);
    assert_eq!(truncate(&text, 255), text);
}

#[test]
fn truncate_cuts_to_limit() {
    let text = "b".repeat(300);
    let out = truncate(&text, 255);
    assert_eq!(out.chars().count(), 255);
}

#[test]
fn truncate_counts_characters_not_bytes() {
    // 'é' is two bytes in UTF-8
    let text = "é".repeat(10);
    let out = truncate(&text, 4);
    assert_eq!(out, "éééé");
}

#[test]
fn bounded_applies_field_limit() {
    let long = "x".repeat(MAX_FIELD_LEN + 40);
    assert_eq!(bounded("title", &long).chars().count(), MAX_FIELD_LEN);
    assert_eq!(bounded("title", "Dracula"), "Dracula");
}

#[test]
fn parse_year_accepts_four_digits() {
    assert_eq!(parse_year("1925"), Ok(1925));
    assert_eq!(parse_year(" 0800\n"), Ok(800));
}

#[test]
fn parse_year_rejects_other_shapes() {
    for bad in ["", "925", "19250", "19a5", "-925", "+925", "１９２５"] {
        assert!(
            matches!(parse_year(bad), Err(InputError::MalformedYear(_))),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn parse_language_code_normalizes_case() {
    assert_eq!(parse_language_code("EN"), Ok("en".to_string()));
    assert_eq!(parse_language_code(" fr "), Ok("fr".to_string()));
}

#[test]
fn parse_language_code_rejects_other_shapes() {
    for bad in ["", "e", "eng", "e1", "ñu", "e-"] {
        assert!(
            matches!(parse_language_code(bad), Err(InputError::MalformedLanguage(_))),
            "accepted {bad:?}"
        );
    }
}
