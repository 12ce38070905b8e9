//! Interactive numbered menu.
//!
//! Reads choices and answers line by line from any `BufRead`, so the loop
//! runs unchanged against stdin or an in-memory script. End of input always
//! leaves the menu cleanly.

use std::io::{BufRead, Write};

use literalura_catalog::{InputError, RemoteCatalog, parse_language_code, parse_year};
use literalura_db::Connection;
use literalura_import::DEFAULT_TOP_LIMIT;

use crate::CliError;
use crate::commands::{authors, books, search, stats};

/// Invalid answers accepted in a row before a prompt gives up.
const MAX_ATTEMPTS: usize = 5;

const OPTIONS: &[(&str, &str)] = &[
    ("1", "Search book by title"),
    ("2", "List cataloged books"),
    ("3", "Search author by name"),
    ("4", "List cataloged authors"),
    ("5", "List books by language"),
    ("6", "List authors alive in a year"),
    ("7", "List authors deceased in a year"),
    ("8", "Top 10 downloaded books"),
    ("9", "Download statistics"),
    ("0", "Exit"),
];

/// Whether the menu keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Outcome of a validated prompt.
#[derive(Debug, PartialEq)]
enum Answer<T> {
    Value(T),
    GaveUp,
    Closed,
}

pub(crate) struct Menu<'a, R, S: ?Sized> {
    conn: &'a Connection,
    source: &'a S,
    input: R,
    quiet: bool,
}

impl<'a, R, S> Menu<'a, R, S>
where
    R: BufRead,
    S: RemoteCatalog + ?Sized,
{
    pub(crate) fn new(conn: &'a Connection, source: &'a S, input: R, quiet: bool) -> Self {
        Self {
            conn,
            source,
            input,
            quiet,
        }
    }

    /// Run until the user picks 0 or input ends.
    pub(crate) fn run(&mut self) -> Result<(), CliError> {
        loop {
            print_options();
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let result = match choice.trim() {
                "0" => Ok(Step::Exit),
                "1" => self.search_book(),
                "2" => books::run_books(self.conn).map(|()| Step::Continue),
                "3" => self.search_author(),
                "4" => authors::run_authors(self.conn, None).map(|()| Step::Continue),
                "5" => self.books_by_language(),
                "6" => self.authors_by_year(authors::run_alive),
                "7" => self.authors_by_year(authors::run_deceased),
                "8" => books::run_top(self.conn, DEFAULT_TOP_LIMIT).map(|()| Step::Continue),
                "9" => stats::run_stats(self.conn).map(|()| Step::Continue),
                other => {
                    log::warn!("Invalid option '{}'. Pick a number from 0 to 9.", other);
                    Ok(Step::Continue)
                }
            };

            match result {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => break,
                // Store and network failures are reported; the session goes on
                Err(e) => log::error!("{}", e),
            }
        }

        log::info!("Goodbye.");
        Ok(())
    }

    fn search_book(&mut self) -> Result<Step, CliError> {
        let Some(term) = self.prompt("Title to search for: ")? else {
            return Ok(Step::Exit);
        };
        if term.trim().is_empty() {
            log::warn!("No title entered.");
            return Ok(Step::Continue);
        }
        search::run_search(self.conn, self.source, &term, self.quiet)?;
        Ok(Step::Continue)
    }

    fn search_author(&mut self) -> Result<Step, CliError> {
        let Some(name) = self.prompt("Author name (or part of it): ")? else {
            return Ok(Step::Exit);
        };
        if name.trim().is_empty() {
            log::warn!("No name entered.");
            return Ok(Step::Continue);
        }
        authors::run_authors(self.conn, Some(&name))?;
        Ok(Step::Continue)
    }

    fn books_by_language(&mut self) -> Result<Step, CliError> {
        books::run_languages();
        match self.ask("Language code: ", parse_language_code)? {
            Answer::Value(code) => books::run_language(self.conn, &code)?,
            Answer::GaveUp => {}
            Answer::Closed => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }

    fn authors_by_year(
        &mut self,
        run: fn(&Connection, &str) -> Result<(), CliError>,
    ) -> Result<Step, CliError> {
        match self.ask("Year (four digits): ", parse_year)? {
            Answer::Value(year) => run(self.conn, &year.to_string())?,
            Answer::GaveUp => {}
            Answer::Closed => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }

    /// Prompt until `parse` accepts the answer, input ends, or attempts run out.
    fn ask<T>(
        &mut self,
        label: &str,
        parse: fn(&str) -> Result<T, InputError>,
    ) -> Result<Answer<T>, CliError> {
        for _ in 0..MAX_ATTEMPTS {
            let Some(line) = self.prompt(label)? else {
                return Ok(Answer::Closed);
            };
            match parse(&line) {
                Ok(value) => return Ok(Answer::Value(value)),
                Err(e) => log::warn!("{}", e),
            }
        }
        log::warn!("Too many invalid answers, back to the menu.");
        Ok(Answer::GaveUp)
    }

    /// Show `label` and read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, CliError> {
        print!("{}", label);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn print_options() {
    println!();
    println!("==== literalura ====");
    for (key, label) in OPTIONS {
        println!("  {} - {}", key, label);
    }
}

#[cfg(test)]
#[path = "tests/menu_tests.rs"]
mod tests;
