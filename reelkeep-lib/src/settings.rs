//! Application settings in `~/.config/reelkeep/settings.toml`.
//!
//! Every field is optional. Values are resolved in priority order: command
//! line, environment, settings file, built-in default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use reelkeep_store::DEFAULT_QUOTA_BYTES;

use crate::enrich::{DEFAULT_CONCURRENCY, EnrichOptions};
use crate::error::ConfigError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "REELKEEP_DATA_DIR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub tmdb: TmdbSettings,
    pub enrichment: EnrichmentSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Storage budget in bytes; `0` disables the limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Load from [`settings_path`]. A missing file gives the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::io(path, e)),
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Storage quota, with `None` meaning unlimited.
    pub fn quota(&self) -> Option<u64> {
        match self.storage.quota_bytes {
            Some(0) => None,
            Some(n) => Some(n),
            None => Some(DEFAULT_QUOTA_BYTES),
        }
    }

    pub fn enrich_options(&self) -> EnrichOptions {
        let defaults = EnrichOptions::default();
        EnrichOptions {
            concurrency: self
                .enrichment
                .concurrency
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_CONCURRENCY),
            request_timeout: self
                .enrichment
                .timeout_secs
                .filter(|&s| s > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }

    /// Where the data directory is and which layer chose it.
    pub fn resolve_data_dir(&self, cli_override: Option<PathBuf>) -> (PathBuf, SettingSource) {
        resolve_data_dir_with(
            cli_override,
            std::env::var(DATA_DIR_ENV).ok(),
            self.storage.data_dir.clone(),
        )
    }
}

/// Where a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    CommandLine,
    EnvVar(&'static str),
    SettingsFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Canonical path of the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("reelkeep").join("settings.toml")
}

/// Data directory used when nothing else is configured.
pub fn default_data_dir() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("reelkeep")
}

fn resolve_data_dir_with(
    cli_override: Option<PathBuf>,
    env: Option<String>,
    file: Option<PathBuf>,
) -> (PathBuf, SettingSource) {
    if let Some(p) = cli_override {
        return (p, SettingSource::CommandLine);
    }
    if let Some(p) = env.filter(|v| !v.trim().is_empty()) {
        return (PathBuf::from(p), SettingSource::EnvVar(DATA_DIR_ENV));
    }
    if let Some(p) = file.filter(|p| !p.as_os_str().is_empty()) {
        return (p, SettingSource::SettingsFile);
    }
    (default_data_dir(), SettingSource::Default)
}

/// Save (or clear, with `None`) the TMDB API key.
pub fn save_api_key(key: Option<&str>) -> Result<(), ConfigError> {
    update_value(
        &settings_path(),
        "tmdb",
        "api_key",
        key.map(|k| toml::Value::String(k.to_string())),
    )
}

/// Save (or clear, with `None`) the data directory.
pub fn save_data_dir(dir: Option<&Path>) -> Result<(), ConfigError> {
    update_value(
        &settings_path(),
        "storage",
        "data_dir",
        dir.map(|d| toml::Value::String(d.to_string_lossy().into_owned())),
    )
}

/// Set or remove `[section] field` in the file at `path`.
///
/// Works on a `toml::Value` so fields this build does not know about are
/// preserved. The file is replaced atomically.
pub fn update_value(
    path: &Path,
    section: &str,
    field: &str,
    value: Option<toml::Value>,
) -> Result<(), ConfigError> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents.parse().map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(ConfigError::io(path, e)),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| ConfigError::malformed("settings root is not a table"))?;
    let section_value = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section_table = section_value
        .as_table_mut()
        .ok_or_else(|| ConfigError::malformed(format!("[{section}] is not a table")))?;

    match value {
        Some(v) => {
            section_table.insert(field.to_string(), v);
        }
        None => {
            section_table.remove(field);
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
    }
    let serialized = toml::to_string_pretty(&doc)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized).map_err(|e| ConfigError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| ConfigError::io(path, e))?;
    log::debug!("Updated [{}] {} in {}", section, field, path.display());
    Ok(())
}

/// The settings file pretty-printed, for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
