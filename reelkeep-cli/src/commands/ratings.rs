//! `rate` subcommands.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelkeep_core::MediaKey;

use super::{AppContext, format_key, label};
use crate::CliError;
use crate::cli_types::ItemArgs;

pub(crate) fn run_rate_set(ctx: &AppContext, item: ItemArgs, stars: i64) -> Result<(), CliError> {
    let key = MediaKey::new(item.kind, item.id);
    let mut library = ctx.open_library()?;
    let rating = library.ratings_mut().set(key, stars)?;
    log::info!(
        "Rated {} {}",
        label(&library, key),
        rating.stars().if_supports_color(Stdout, |t| t.yellow())
    );
    Ok(())
}

pub(crate) fn run_rate_get(ctx: &AppContext, item: ItemArgs) -> Result<(), CliError> {
    let key = MediaKey::new(item.kind, item.id);
    let library = ctx.open_library()?;
    match library.ratings().get(key) {
        Some(rating) => log::info!(
            "{} {} ({}/5)",
            label(&library, key),
            rating.stars().if_supports_color(Stdout, |t| t.yellow()),
            rating
        ),
        None => log::info!("You have not rated {}", format_key(key)),
    }
    Ok(())
}

pub(crate) fn run_rate_remove(ctx: &AppContext, item: ItemArgs) -> Result<(), CliError> {
    let key = MediaKey::new(item.kind, item.id);
    let mut library = ctx.open_library()?;
    if library.ratings_mut().remove(key) {
        log::info!("Removed your rating for {}", format_key(key));
    } else {
        log::info!("You have not rated {}", format_key(key));
    }
    Ok(())
}

pub(crate) fn run_rate_list(ctx: &AppContext) -> Result<(), CliError> {
    let library = ctx.open_library()?;
    let ratings = library.ratings();
    if ratings.is_empty() {
        log::info!("No ratings yet.");
        return Ok(());
    }

    log::info!(
        "{} ({})",
        "Ratings".if_supports_color(Stdout, |t| t.bold()),
        ratings.len()
    );
    for (key, rating) in ratings.iter() {
        log::info!(
            "  {} {}",
            rating.stars().if_supports_color(Stdout, |t| t.yellow()),
            label(&library, *key)
        );
    }
    Ok(())
}
