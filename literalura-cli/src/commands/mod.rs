pub(crate) mod authors;
pub(crate) mod books;
pub(crate) mod config;
pub(crate) mod search;
pub(crate) mod stats;

use literalura_db::Connection;
use literalura_gutendex::GutendexClient;

use crate::CliError;
use crate::settings::Settings;

/// Open (creating if needed) the catalog database named by `settings`.
pub(crate) fn open_catalog(settings: &Settings) -> Result<Connection, CliError> {
    if let Some(parent) = settings.database.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    log::debug!("Opening catalog at {}", settings.database.display());
    literalura_db::open_database(&settings.database).map_err(|e| {
        CliError::database(format!(
            "Failed to open catalog database {}: {}",
            settings.database.display(),
            e
        ))
    })
}

pub(crate) fn gutendex_client(settings: &Settings) -> Result<GutendexClient, CliError> {
    GutendexClient::new(settings.base_url.clone(), settings.timeout)
        .map_err(|e| CliError::gutendex(format!("Failed to create HTTP client: {}", e)))
}
