//! `config` subcommands.

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelkeep_lib::settings;

use super::AppContext;
use crate::CliError;

/// Show only the first two characters of a secret.
fn mask_value(s: &str) -> String {
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        format!("{}****", s.chars().take(2).collect::<String>())
    }
}

/// Show resolved settings and where each came from.
pub(crate) fn run_config_show(ctx: &AppContext) -> Result<(), CliError> {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "reelkeep configuration".if_supports_color(Stdout, |t| t.bold()),
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

    let field = |name: &str, value: Option<String>, source: String| match value {
        Some(v) => log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            v,
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            "-".if_supports_color(Stdout, |t| t.red()),
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        ),
    };

    let (api_key, api_key_source) = ctx.api_key();
    field(
        "tmdb.api_key",
        api_key.as_deref().map(mask_value),
        api_key_source.to_string(),
    );
    field(
        "tmdb.base_url",
        ctx.settings.tmdb.base_url.clone(),
        if ctx.settings.tmdb.base_url.is_some() {
            "settings file".to_string()
        } else {
            "default".to_string()
        },
    );
    field(
        "storage.data_dir",
        Some(ctx.data_dir.display().to_string()),
        ctx.data_dir_source.to_string(),
    );
    field(
        "storage.quota_bytes",
        Some(match ctx.settings.quota() {
            Some(bytes) => bytes.to_string(),
            None => "unlimited".to_string(),
        }),
        source_of(ctx.settings.storage.quota_bytes.is_some()),
    );

    let options = ctx.settings.enrich_options();
    field(
        "enrichment.concurrency",
        Some(options.concurrency.to_string()),
        source_of(ctx.settings.enrichment.concurrency.is_some()),
    );
    field(
        "enrichment.timeout_secs",
        Some(options.request_timeout.as_secs().to_string()),
        source_of(ctx.settings.enrichment.timeout_secs.is_some()),
    );

    if let Some(contents) = settings::load_settings_string() {
        log::debug!("Settings file contents:\n{}", contents);
    }
    Ok(())
}

fn source_of(in_file: bool) -> String {
    let source = if in_file { "settings file" } else { "default" };
    source.to_string()
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}

pub(crate) fn run_config_set_api_key(key: &str) -> Result<(), CliError> {
    let key = key.trim();
    if key.is_empty() {
        settings::save_api_key(None)?;
        log::info!("Cleared the TMDB API key");
    } else {
        settings::save_api_key(Some(key))?;
        log::info!(
            "{} Saved TMDB API key {} to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            mask_value(key),
            settings::settings_path().display()
        );
    }
    Ok(())
}

pub(crate) fn run_config_set_data_dir(path: &Path) -> Result<(), CliError> {
    let path = if path.is_relative() {
        std::env::current_dir()
            .map_err(|e| CliError::other(format!("Cannot resolve current directory: {}", e)))?
            .join(path)
    } else {
        path.to_path_buf()
    };
    settings::save_data_dir(Some(&path))?;
    log::info!(
        "{} Data directory set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display()
    );
    Ok(())
}
