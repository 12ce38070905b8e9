use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use literalura_catalog::RemoteCatalog;
use literalura_db::Connection;
use literalura_import::{ResolvedBook, sync_book};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::render;

/// Search the remote catalog for `term` and store the first matching book.
pub(crate) fn run_search<S>(
    conn: &Connection,
    source: &S,
    term: &str,
    quiet: bool,
) -> Result<Option<ResolvedBook>, CliError>
where
    S: RemoteCatalog + ?Sized,
{
    let term = term.trim();
    if term.is_empty() {
        return Err(CliError::InvalidInput("Search term is empty".to_string()));
    }

    let spinner = searching_spinner(term, quiet);
    let result = sync_book(conn, source, term);
    spinner.finish_and_clear();

    match result? {
        Some(resolved) => {
            let label = if resolved.created {
                "BOOK ADDED".if_supports_color(Stdout, |t| t.green()).to_string()
            } else {
                "BOOK FOUND".if_supports_color(Stdout, |t| t.cyan()).to_string()
            };
            log::info!("----- {} -----", label);
            render::emit(&render::book_lines(&resolved.book));
            if resolved.authors_created > 0 {
                log::debug!(
                    "{} new author(s) stored for '{}'",
                    resolved.authors_created,
                    resolved.book.title
                );
            }
            if !resolved.created {
                log::info!("  (already in the catalog)");
            }
            crate::log_blank();
            Ok(Some(resolved))
        }
        None => {
            log::warn!("BOOK NOT FOUND: no Gutendex title contains '{}'", term);
            Ok(None)
        }
    }
}

fn searching_spinner(term: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        pb.set_style(style.tick_chars("/-\\|"));
    }
    pb.set_message(format!("Searching Gutendex for '{}'...", term));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
