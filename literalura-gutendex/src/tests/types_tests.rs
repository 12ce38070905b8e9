use super::*;
use crate::client::parse_search_response;
use crate::error::GutendexError;

const SEARCH_FIXTURE: &str = r#"{
  "count": 2,
  "next": null,
  "previous": null,
  "results": [
    {
      "id": 1342,
      "title": "Pride and Prejudice",
      "authors": [
        {"name": "Austen, Jane", "birth_year": 1775, "death_year": 1817}
      ],
      "translators": [],
      "subjects": ["England -- Fiction"],
      "bookshelves": [],
      "languages": ["en"],
      "copyright": false,
      "media_type": "Text",
      "formats": {"text/html": "https://www.gutenberg.org/ebooks/1342.html.images"},
      "download_count": 48375
    },
    {
      "id": 17949,
      "title": "Les Misérables",
      "authors": [
        {"name": "Hugo, Victor", "birth_year": 1802, "death_year": null},
        {"name": "Anonymous", "birth_year": null, "death_year": null}
      ],
      "languages": ["fr", "en"],
      "download_count": 512.5
    }
  ]
}"#;

#[test]
fn parses_search_results() {
    let resp = parse_search_response(SEARCH_FIXTURE).unwrap();
    assert_eq!(resp.count, 2);
    assert_eq!(resp.results.len(), 2);

    let first = &resp.results[0];
    assert_eq!(first.title, "Pride and Prejudice");
    assert_eq!(first.download_count, 48375.0);
    assert_eq!(first.authors[0].birth_year, Some(1775));
}

#[test]
fn null_years_become_none() {
    let resp = parse_search_response(SEARCH_FIXTURE).unwrap();
    let hugo = &resp.results[1].authors[0];
    assert_eq!(hugo.birth_year, Some(1802));
    assert_eq!(hugo.death_year, None);
    let anon = &resp.results[1].authors[1];
    assert_eq!(anon.birth_year, None);
}

#[test]
fn converts_to_fetched_book() {
    let resp = parse_search_response(SEARCH_FIXTURE).unwrap();
    let fetched: FetchedBook = resp.results[1].clone().into();
    assert_eq!(fetched.title, "Les Misérables");
    assert_eq!(fetched.languages, vec!["fr", "en"]);
    assert_eq!(fetched.download_count, 512.5);
    assert_eq!(fetched.authors.len(), 2);
    assert_eq!(fetched.authors[0].name, "Hugo, Victor");
}

#[test]
fn empty_result_page() {
    let resp = parse_search_response(r#"{"count": 0, "next": null, "previous": null, "results": []}"#)
        .unwrap();
    assert_eq!(resp.count, 0);
    assert!(resp.results.is_empty());
}

#[test]
fn missing_optional_fields_default() {
    let resp = parse_search_response(r#"{"results": [{"id": 1, "title": "Untitled"}]}"#).unwrap();
    let book = &resp.results[0];
    assert!(book.authors.is_empty());
    assert!(book.languages.is_empty());
    assert_eq!(book.download_count, 0.0);
}

#[test]
fn entry_without_id_decodes() {
    let resp = parse_search_response(
        r#"{"count": 1, "results": [{"title": "Walden", "languages": ["en"], "download_count": 9}]}"#,
    )
    .unwrap();
    let fetched: FetchedBook = resp.results[0].clone().into();
    assert_eq!(fetched.title, "Walden");
    assert_eq!(fetched.download_count, 9.0);
}

#[test]
fn malformed_body_is_parse_error() {
    let err = parse_search_response("<html>Bad Gateway</html>").unwrap_err();
    match err {
        GutendexError::Parse { snippet, .. } => assert!(snippet.starts_with("<html>")),
        other => panic!("unexpected error: {other}"),
    }
}
