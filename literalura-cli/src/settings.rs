//! Application settings: database location and Gutendex endpoint.
//!
//! Each value resolves through a priority chain: command-line flag,
//! environment variable, `~/.config/literalura/settings.toml`, built-in
//! default. The winning source is kept so `config show` can report it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use literalura_gutendex::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::Deserialize;

use crate::CliError;

pub(crate) const ENV_DB: &str = "LITERALURA_DB";
pub(crate) const ENV_GUTENDEX_URL: &str = "LITERALURA_GUTENDEX_URL";

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    Flag,
    EnvVar(&'static str),
    SettingsFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub database: PathBuf,
    pub database_source: SettingSource,
    pub base_url: String,
    pub base_url_source: SettingSource,
    pub timeout: Duration,
}

/// TOML settings file format.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    catalog: CatalogSection,
    gutendex: GutendexSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
    database: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GutendexSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Canonical path to the settings file: `~/.config/literalura/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("literalura").join("settings.toml")
}

/// Default catalog location under the platform data directory.
pub(crate) fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("literalura").join("literalura.db")
}

/// Load settings, applying command-line overrides.
pub(crate) fn load(db_flag: Option<PathBuf>, url_flag: Option<String>) -> Result<Settings, CliError> {
    let file = load_file(&settings_path())?;
    Ok(resolve(file, db_flag, url_flag, |var| std::env::var(var).ok()))
}

fn load_file(path: &Path) -> Result<SettingsFile, CliError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_file(&contents)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SettingsFile::default()),
        Err(e) => Err(e.into()),
    }
}

fn parse_file(contents: &str) -> Result<SettingsFile, toml::de::Error> {
    toml::from_str(contents)
}

fn resolve(
    file: SettingsFile,
    db_flag: Option<PathBuf>,
    url_flag: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let (database, database_source) = if let Some(p) = db_flag {
        (p, SettingSource::Flag)
    } else if let Some(p) = env(ENV_DB).filter(|v| !v.is_empty()) {
        (PathBuf::from(p), SettingSource::EnvVar(ENV_DB))
    } else if let Some(p) = file.catalog.database {
        (p, SettingSource::SettingsFile)
    } else {
        (default_database_path(), SettingSource::Default)
    };

    let (base_url, base_url_source) = if let Some(u) = url_flag {
        (u, SettingSource::Flag)
    } else if let Some(u) = env(ENV_GUTENDEX_URL).filter(|v| !v.is_empty()) {
        (u, SettingSource::EnvVar(ENV_GUTENDEX_URL))
    } else if let Some(u) = file.gutendex.base_url {
        (u, SettingSource::SettingsFile)
    } else {
        (DEFAULT_BASE_URL.to_string(), SettingSource::Default)
    };

    let timeout = file
        .gutendex
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    Settings {
        database,
        database_source,
        base_url,
        base_url_source,
        timeout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_file_or_overrides() {
        let s = resolve(SettingsFile::default(), None, None, no_env);
        assert_eq!(s.database_source, SettingSource::Default);
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
        assert_eq!(s.timeout, DEFAULT_TIMEOUT);
        assert!(s.database.ends_with("literalura/literalura.db"));
    }

    #[test]
    fn settings_file_values_apply() {
        let file = parse_file(
            r#"
            [catalog]
            database = "/tmp/books.db"

            [gutendex]
            base_url = "http://localhost:8000/books/"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        let s = resolve(file, None, None, no_env);
        assert_eq!(s.database, PathBuf::from("/tmp/books.db"));
        assert_eq!(s.database_source, SettingSource::SettingsFile);
        assert_eq!(s.base_url, "http://localhost:8000/books/");
        assert_eq!(s.timeout, Duration::from_secs(5));
    }

    #[test]
    fn env_beats_file_and_flag_beats_env() {
        let file = parse_file("[catalog]\ndatabase = \"/from/file.db\"\n").unwrap();
        let env = |var: &str| (var == ENV_DB).then(|| "/from/env.db".to_string());

        let s = resolve(file, None, None, env);
        assert_eq!(s.database, PathBuf::from("/from/env.db"));
        assert_eq!(s.database_source, SettingSource::EnvVar(ENV_DB));

        let file = parse_file("[catalog]\ndatabase = \"/from/file.db\"\n").unwrap();
        let s = resolve(file, Some(PathBuf::from("/from/flag.db")), None, env);
        assert_eq!(s.database, PathBuf::from("/from/flag.db"));
        assert_eq!(s.database_source, SettingSource::Flag);
    }

    #[test]
    fn partial_file_is_accepted() {
        let file = parse_file("[gutendex]\ntimeout_secs = 60\n").unwrap();
        let s = resolve(file, None, None, no_env);
        assert_eq!(s.timeout, Duration::from_secs(60));
        assert_eq!(s.base_url_source, SettingSource::Default);
    }

    #[test]
    fn malformed_file_is_rejected() {
        assert!(parse_file("[catalog\ndatabase = 1").is_err());
    }
}
