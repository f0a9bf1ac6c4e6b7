//! `stats` subcommand.

use std::sync::Arc;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelkeep_lib::UserStats;

use super::{AppContext, format_key};
use crate::CliError;

pub(crate) fn run_stats(ctx: &AppContext, offline: bool, json: bool) -> Result<(), CliError> {
    let library = ctx.open_library()?;

    let (stats, unenriched) = if offline || library.ratings().is_empty() {
        (library.local_stats(), Vec::new())
    } else {
        let client = Arc::new(ctx.tmdb_client()?);
        let options = ctx.settings.enrich_options();
        let msg = format!("Loading details for {} rated titles...", library.ratings().len());
        let (stats, report) = ctx.block_on(&msg, library.stats(client, &options))?;
        (stats, report.unenriched)
    };

    if json {
        let out = serde_json::to_string_pretty(&stats)
            .map_err(|e| CliError::other(format!("Failed to serialize stats: {}", e)))?;
        log::info!("{}", out);
    } else {
        print_stats(&stats, offline);
    }

    if !unenriched.is_empty() {
        log::warn!(
            "{} rated titles could not be loaded and are left out of the genre ranking:",
            unenriched.len()
        );
        for entry in &unenriched {
            log::warn!("  {} ({})", format_key(entry.key), entry.reason);
        }
    }
    Ok(())
}

fn print_stats(stats: &UserStats, offline: bool) {
    log::info!("{}", "Your stats".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();
    log::info!("  Ratings:        {}", stats.total_ratings);
    log::info!("  Reviews:        {}", stats.total_reviews);
    log::info!(
        "  Average rating: {}",
        format!("{:.1}", stats.average_rating).if_supports_color(Stdout, |t| t.yellow())
    );

    if offline {
        return;
    }
    crate::log_blank();
    if stats.top_genres.is_empty() {
        log::info!("  Top genres:     -");
        return;
    }
    log::info!("  Top genres:");
    for genre in &stats.top_genres {
        log::info!(
            "    {:<16} {}",
            genre.genre.if_supports_color(Stdout, |t| t.cyan()),
            genre.count
        );
    }
}
