//! reelkeep CLI
//!
//! Browse the TMDB catalog and manage a local library of favorites,
//! watchlist entries, ratings and reviews.

mod cli_types;
mod commands;
mod error;
mod spinner;

use std::io::Write;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, CollectionAction, Commands, ConfigAction, RateAction, ReviewAction};
use commands::AppContext;
use commands::collections::Collection;
pub(crate) use error::CliError;

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Install the logger. Info lines are printed bare since they are the
/// command's normal output; other levels get a prefix.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            level => writeln!(
                buf,
                "{} [{}] {}",
                level.if_supports_color(Stdout, |t| t.dimmed()),
                record.target(),
                record.args()
            ),
        })
        .init();
}

/// Run commands that only touch the settings file itself. They must work
/// even when that file does not load. `None` means the command needs the
/// full context.
fn run_without_context(command: &Commands) -> Option<Result<(), CliError>> {
    let Commands::Config { action } = command else {
        return None;
    };
    match action {
        ConfigAction::Path => Some(commands::config::run_config_path()),
        ConfigAction::SetApiKey { key } => Some(commands::config::run_config_set_api_key(key)),
        ConfigAction::SetDataDir { path } => Some(commands::config::run_config_set_data_dir(path)),
        ConfigAction::Show => None,
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(result) = run_without_context(&cli.command) {
        return result;
    }

    let ctx = AppContext::load(cli.data_dir, cli.quiet)?;

    match cli.command {
        Commands::Favorites { action } => run_collection(&ctx, Collection::Favorites, action),
        Commands::Watchlist { action } => run_collection(&ctx, Collection::Watchlist, action),
        Commands::Rate { action } => match action {
            RateAction::Set { item, stars } => commands::ratings::run_rate_set(&ctx, item, stars),
            RateAction::Get { item } => commands::ratings::run_rate_get(&ctx, item),
            RateAction::Remove { item } => commands::ratings::run_rate_remove(&ctx, item),
            RateAction::List => commands::ratings::run_rate_list(&ctx),
        },
        Commands::Review { action } => match action {
            ReviewAction::Set { item, text } => commands::reviews::run_review_set(&ctx, item, text),
            ReviewAction::Get { item } => commands::reviews::run_review_get(&ctx, item),
            ReviewAction::Remove { item } => commands::reviews::run_review_remove(&ctx, item),
            ReviewAction::List => commands::reviews::run_review_list(&ctx),
        },
        Commands::Stats { offline, json } => commands::stats::run_stats(&ctx, offline, json),
        Commands::Browse {
            kind,
            category,
            listing,
        } => commands::catalog::run_browse(&ctx, kind, category, listing),
        Commands::Search {
            kind,
            query,
            listing,
        } => commands::catalog::run_search(&ctx, kind, &query, listing),
        Commands::Genres { kind } => commands::catalog::run_genres(&ctx, kind),
        Commands::Show { item } => commands::catalog::run_show(&ctx, item),
        Commands::Config { .. } => commands::config::run_config_show(&ctx),
    }
}

fn run_collection(
    ctx: &AppContext,
    collection: Collection,
    action: CollectionAction,
) -> Result<(), CliError> {
    use commands::collections::*;
    match action {
        CollectionAction::List => run_collection_list(ctx, collection),
        CollectionAction::Add { item, title } => run_collection_add(ctx, collection, item, title),
        CollectionAction::Remove { item } => run_collection_remove(ctx, collection, item),
        CollectionAction::Toggle { item, title } => {
            run_collection_toggle(ctx, collection, item, title)
        }
        CollectionAction::Clear => run_collection_clear(ctx, collection),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_editing_commands_skip_context() {
        let cli = Cli::parse_from(["reelkeep", "config", "path"]);
        assert!(matches!(run_without_context(&cli.command), Some(Ok(()))));

        let cli = Cli::parse_from(["reelkeep", "config", "show"]);
        assert!(run_without_context(&cli.command).is_none());

        let cli = Cli::parse_from(["reelkeep", "rate", "list"]);
        assert!(run_without_context(&cli.command).is_none());
    }
}
