use literalura_catalog::Author;
use literalura_db::Connection;
use literalura_import::QueryEngine;

use crate::CliError;
use crate::render;

pub(crate) fn run_authors(conn: &Connection, name: Option<&str>) -> Result<(), CliError> {
    let engine = QueryEngine::new(conn);
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(fragment) => {
            let authors = engine.search_authors(fragment)?;
            show(&authors, &format!("No author matching '{}'.", fragment), "Matching authors");
        }
        None => {
            let authors = engine.authors()?;
            show(&authors, "No authors in the catalog yet.", "Cataloged authors");
        }
    }
    Ok(())
}

pub(crate) fn run_alive(conn: &Connection, year: &str) -> Result<(), CliError> {
    let authors = QueryEngine::new(conn).authors_alive_in(year)?;
    let year = year.trim();
    show(
        &authors,
        &format!("No cataloged author was alive in {}.", year),
        &format!("Authors alive in {}", year),
    );
    Ok(())
}

pub(crate) fn run_deceased(conn: &Connection, year: &str) -> Result<(), CliError> {
    let authors = QueryEngine::new(conn).authors_deceased_in(year)?;
    let year = year.trim();
    show(
        &authors,
        &format!("No cataloged author had died by {}.", year),
        &format!("Authors deceased by {}", year),
    );
    Ok(())
}

fn show(authors: &[Author], empty: &str, title: &str) {
    if authors.is_empty() {
        log::info!("{}", empty);
        return;
    }
    log::info!("{}", render::heading(&format!("{} ({})", title, authors.len())));
    for author in authors {
        crate::log_blank();
        render::emit(&render::author_lines(author));
    }
}
