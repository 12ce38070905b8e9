use literalura_db::Connection;
use literalura_import::QueryEngine;

use crate::CliError;
use crate::render;

pub(crate) fn run_stats(conn: &Connection) -> Result<(), CliError> {
    let engine = QueryEngine::new(conn);
    let Some(stats) = engine.statistics()? else {
        log::info!("No books in the catalog yet; nothing to summarize.");
        return Ok(());
    };
    let counts = engine.counts()?;

    log::info!("{}", render::heading("Download statistics"));
    render::emit(&render::stats_lines(&stats));
    crate::log_blank();
    log::info!(
        "  Catalog holds {} and {}.",
        render::plural(counts.books as usize, "book"),
        render::plural(counts.authors as usize, "author")
    );
    Ok(())
}
