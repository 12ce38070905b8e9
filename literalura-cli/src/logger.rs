//! Terminal logger for the `log` facade.
//!
//! Info goes to stdout as plain text; warnings and errors go to stderr,
//! colored when the stream supports it. Verbose mode adds timestamps and
//! enables debug output from the literalura crates.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;

struct CliLogger {
    verbose: bool,
    logfile: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record<'_>) -> String {
        if self.verbose {
            format!(
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        } else {
            record.args().to_string()
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        // Debug output from dependencies (HTTP, TLS) is never interesting here
        metadata.level() <= log::max_level()
            && (metadata.level() <= Level::Info || metadata.target().starts_with("literalura"))
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format(record);
        match record.level() {
            Level::Error => eprintln!("{}", line.if_supports_color(Stderr, |t| t.red())),
            Level::Warn => eprintln!("{}", line.if_supports_color(Stderr, |t| t.yellow())),
            _ => println!("{line}"),
        }

        if let Some(file) = &self.logfile {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.logfile {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Install the logger. `verbose` wins over `quiet`.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let logfile = logfile.map(File::create).transpose()?.map(Mutex::new);

    log::set_boxed_logger(Box::new(CliLogger { verbose, logfile }))
        .map_err(|e| CliError::other(format!("Failed to install logger: {e}")))?;
    log::set_max_level(level);
    Ok(())
}
