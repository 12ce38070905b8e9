use literalura_catalog::KNOWN_LANGUAGES;
use literalura_db::Connection;
use literalura_import::QueryEngine;

use crate::CliError;
use crate::render;

pub(crate) fn run_books(conn: &Connection) -> Result<(), CliError> {
    let books = QueryEngine::new(conn).books()?;
    if books.is_empty() {
        log::info!("No books in the catalog yet. Search for a title to add one.");
        return Ok(());
    }

    log::info!("{}", render::heading(&format!("Cataloged books ({})", books.len())));
    for book in &books {
        crate::log_blank();
        render::emit(&render::book_lines(book));
    }
    Ok(())
}

pub(crate) fn run_language(conn: &Connection, code: &str) -> Result<(), CliError> {
    let books = QueryEngine::new(conn).books_in_language(code)?;
    let code = code.trim().to_lowercase();
    if books.is_empty() {
        log::info!("No books in language '{}'.", code);
        return Ok(());
    }

    log::info!(
        "{}",
        render::heading(&format!(
            "{} in {}",
            render::plural(books.len(), "book"),
            render::languages(std::slice::from_ref(&code))
        ))
    );
    for book in &books {
        crate::log_blank();
        render::emit(&render::book_lines(book));
    }
    Ok(())
}

pub(crate) fn run_languages() {
    log::info!("{}", render::heading("Languages"));
    for lang in KNOWN_LANGUAGES {
        log::info!("  {} - {}", lang.code, lang.name);
    }
    log::info!("Any other two-letter code is accepted as well.");
}

pub(crate) fn run_top(conn: &Connection, limit: u32) -> Result<(), CliError> {
    let books = QueryEngine::new(conn).top_downloads(limit)?;
    if books.is_empty() {
        log::info!("No books in the catalog yet.");
        return Ok(());
    }

    log::info!(
        "{}",
        render::heading(&format!("Top {} downloaded", render::plural(books.len(), "book")))
    );
    render::emit(&render::top_lines(&books));
    Ok(())
}
