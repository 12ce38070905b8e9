//! Text rendering for books, authors and statistics.
//!
//! Functions here build plain lines; callers emit them through the logger so
//! `--quiet` and `--logfile` apply uniformly.

use literalura_catalog::{Author, Book, DownloadStats, language_name};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// A year, or `N/A` when unknown.
pub(crate) fn year(value: Option<i32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |y| y.to_string())
}

/// `"1 book"`, `"3 books"`.
pub(crate) fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

pub(crate) fn heading(text: &str) -> String {
    format!("{}", text.if_supports_color(Stdout, |t| t.bold()))
}

/// Language codes with their display names where known: `en (English), xx`.
pub(crate) fn languages(codes: &[String]) -> String {
    if codes.is_empty() {
        return "N/A".to_string();
    }
    codes
        .iter()
        .map(|code| match language_name(code) {
            Some(name) => format!("{code} ({name})"),
            None => code.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn book_lines(book: &Book) -> Vec<String> {
    let authors = book.author_names();
    vec![
        format!("  Title:     {}", book.title),
        format!(
            "  Author:    {}",
            if authors.is_empty() { "Unknown" } else { authors.as_str() }
        ),
        format!("  Languages: {}", languages(&book.languages)),
        format!("  Downloads: {:.2}", book.download_count),
    ]
}

pub(crate) fn author_lines(author: &Author) -> Vec<String> {
    let titles = author.book_titles();
    vec![
        format!("  Name:  {}", author.name),
        format!("  Born:  {}", year(author.birth_year)),
        format!("  Died:  {}", year(author.death_year)),
        format!(
            "  Books: {}",
            if titles.is_empty() {
                "None".to_string()
            } else {
                titles.join(", ")
            }
        ),
    ]
}

/// Ranked lines for the popularity list, 1-based.
pub(crate) fn top_lines(books: &[Book]) -> Vec<String> {
    books
        .iter()
        .enumerate()
        .map(|(i, b)| {
            format!(
                "  {:>2}. {} - Downloads: {:.0}",
                i + 1,
                b.title.to_uppercase(),
                b.download_count
            )
        })
        .collect()
}

pub(crate) fn stats_lines(stats: &DownloadStats) -> Vec<String> {
    vec![
        format!("  Books:     {:>12}", stats.count),
        format!("  Total:     {:>12.0}", stats.sum),
        format!("  Maximum:   {:>12.0}", stats.max),
        format!("  Minimum:   {:>12.0}", stats.min),
        format!("  Average:   {:>12.2}", stats.average()),
    ]
}

/// Emit lines through the logger.
pub(crate) fn emit(lines: &[String]) {
    for line in lines {
        log::info!("{}", line);
    }
}
