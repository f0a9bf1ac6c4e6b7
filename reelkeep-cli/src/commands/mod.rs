pub(crate) mod catalog;
pub(crate) mod collections;
pub(crate) mod config;
pub(crate) mod ratings;
pub(crate) mod reviews;
pub(crate) mod stats;

use std::future::Future;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelkeep_core::{MediaItem, MediaKey};
use reelkeep_lib::{ConfigError, SettingSource, Settings, UserLibrary};
use reelkeep_tmdb::{API_KEY_ENV, ApiKeySource, TmdbClient, TmdbConfig, resolve_api_key};

use crate::CliError;

/// Settings and paths resolved once per invocation.
pub(crate) struct AppContext {
    pub settings: Settings,
    pub data_dir: PathBuf,
    pub data_dir_source: SettingSource,
    pub quiet: bool,
}

impl AppContext {
    pub(crate) fn load(data_dir: Option<PathBuf>, quiet: bool) -> Result<Self, CliError> {
        let settings = Settings::load()?;
        let (data_dir, data_dir_source) = settings.resolve_data_dir(data_dir);
        log::debug!("Data directory: {} ({})", data_dir.display(), data_dir_source);
        Ok(Self {
            settings,
            data_dir,
            data_dir_source,
            quiet,
        })
    }

    pub(crate) fn open_library(&self) -> Result<UserLibrary, CliError> {
        Ok(UserLibrary::open_dir(&self.data_dir, self.settings.quota())?)
    }

    pub(crate) fn api_key(&self) -> (Option<String>, ApiKeySource) {
        resolve_api_key(
            std::env::var(API_KEY_ENV).ok(),
            self.settings.tmdb.api_key.clone(),
        )
    }

    pub(crate) fn tmdb_client(&self) -> Result<TmdbClient, CliError> {
        let (key, source) = self.api_key();
        let key = key.ok_or(ConfigError::MissingApiKey)?;
        log::debug!("Using TMDB API key from {}", source);

        let mut config = TmdbConfig::new(key);
        if let Some(url) = &self.settings.tmdb.base_url {
            config = config.with_base_url(url.clone());
        }
        Ok(TmdbClient::new(config)?)
    }

    /// Run `fut` to completion on a fresh runtime behind a spinner.
    pub(crate) fn block_on<F: Future>(&self, msg: &str, fut: F) -> Result<F::Output, CliError> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
        let pb = crate::spinner::start(self.quiet, msg);
        let out = rt.block_on(fut);
        pb.finish_and_clear();
        Ok(out)
    }
}

/// One-line summary of an item: `Title (Year)  movie:123  7.9`.
pub(crate) fn format_item(item: &MediaItem) -> String {
    let year = item
        .year()
        .map(|y| format!(" ({})", y))
        .unwrap_or_default();
    let score = if item.vote_average > 0.0 {
        format!("  {:.1}", item.vote_average)
    } else {
        String::new()
    };
    format!(
        "{}{}  {}{}",
        item.title.if_supports_color(Stdout, |t| t.bold()),
        year,
        item.key().if_supports_color(Stdout, |t| t.dimmed()),
        score.if_supports_color(Stdout, |t| t.yellow()),
    )
}

pub(crate) fn format_key(key: MediaKey) -> String {
    key.if_supports_color(Stdout, |t| t.cyan()).to_string()
}

/// A title for `key` from the locally saved items, if any.
pub(crate) fn local_title(library: &UserLibrary, key: MediaKey) -> Option<&str> {
    library
        .favorites()
        .get(key)
        .or_else(|| library.watchlist().get(key))
        .map(|item| item.title.as_str())
}

/// `key` followed by its locally known title, if any.
pub(crate) fn label(library: &UserLibrary, key: MediaKey) -> String {
    match local_title(library, key) {
        Some(title) => format!("{} {}", format_key(key), title),
        None => format_key(key),
    }
}
