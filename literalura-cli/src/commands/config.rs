use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{self, Settings};

/// Show effective settings and where each value came from.
pub(crate) fn run_config_show(settings: &Settings) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "literalura Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    log::info!(
        "  Database:  {} {}",
        settings.database.display(),
        format!("({})", settings.database_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  Gutendex:  {} {}",
        settings.base_url,
        format!("({})", settings.base_url_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  Timeout:   {}s", settings.timeout.as_secs());
}

/// Print the settings file path, suitable for scripting.
pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}
