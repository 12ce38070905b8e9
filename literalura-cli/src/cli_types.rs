//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use literalura_import::DEFAULT_TOP_LIMIT;

#[derive(Parser)]
#[command(name = "literalura")]
#[command(about = "Catalog Project Gutenberg books and authors", long_about = None)]
pub(crate) struct Cli {
    /// Catalog database file (overrides LITERALURA_DB and settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Gutendex books endpoint (overrides LITERALURA_GUTENDEX_URL and settings.toml)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Search Gutendex for a title and add the first match to the catalog
    Search {
        /// Title or part of a title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// List cataloged books with their authors
    Books,

    /// List cataloged authors, or search them by name
    Authors {
        /// Case-insensitive name fragment
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List books available in a language
    Language {
        /// Two-letter language code (e.g., en, es, fr)
        code: String,
    },

    /// List the language codes offered by the menu
    Languages,

    /// List authors alive in a year
    Alive {
        /// Four-digit year
        year: String,
    },

    /// List authors deceased in or before a year
    Deceased {
        /// Four-digit year
        year: String,
    },

    /// Show the most downloaded books
    Top {
        /// Number of books to show
        #[arg(short, long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: u32,
    },

    /// Show download statistics for the catalog
    Stats,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where each value came from
    Show,

    /// Print the settings file path
    Path,
}
