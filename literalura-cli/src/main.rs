//! literalura CLI
//!
//! Build a local catalog of Project Gutenberg books and authors from the
//! Gutendex API, then browse and query it.

mod cli_types;
mod commands;
mod error;
mod logger;
mod menu;
mod render;
mod settings;

use std::io;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::{authors, books, config, search, stats};
pub(crate) use error::CliError;

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("Error: {}", e);
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = settings::load(cli.db, cli.base_url)?;
    let command = cli.command.unwrap_or(Commands::Menu);

    // Commands that never touch the catalog
    match &command {
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => config::run_config_show(&settings),
                ConfigAction::Path => config::run_config_path(),
            }
            return Ok(());
        }
        Commands::Languages => {
            books::run_languages();
            return Ok(());
        }
        _ => {}
    }

    let conn = commands::open_catalog(&settings)?;

    match command {
        Commands::Menu => {
            let client = commands::gutendex_client(&settings)?;
            let stdin = io::stdin();
            menu::Menu::new(&conn, &client, stdin.lock(), cli.quiet).run()
        }
        Commands::Search { title } => {
            let client = commands::gutendex_client(&settings)?;
            search::run_search(&conn, &client, &title.join(" "), cli.quiet).map(|_| ())
        }
        Commands::Books => books::run_books(&conn),
        Commands::Authors { name } => authors::run_authors(&conn, name.as_deref()),
        Commands::Language { code } => books::run_language(&conn, &code),
        Commands::Alive { year } => authors::run_alive(&conn, &year),
        Commands::Deceased { year } => authors::run_deceased(&conn, &year),
        Commands::Top { limit } => books::run_top(&conn, limit),
        Commands::Stats => stats::run_stats(&conn),
        Commands::Config { .. } | Commands::Languages => Ok(()),
    }
}
