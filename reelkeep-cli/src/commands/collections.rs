//! `favorites` and `watchlist` subcommands.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelkeep_core::{MediaItem, MediaKey};
use reelkeep_lib::UserLibrary;
use reelkeep_store::{ItemSet, Toggle};

use super::{AppContext, format_item, format_key};
use crate::CliError;
use crate::cli_types::ItemArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Collection {
    Favorites,
    Watchlist,
}

impl Collection {
    fn name(self) -> &'static str {
        match self {
            Collection::Favorites => "favorites",
            Collection::Watchlist => "watchlist",
        }
    }

    fn of(self, library: &UserLibrary) -> &ItemSet {
        match self {
            Collection::Favorites => library.favorites(),
            Collection::Watchlist => library.watchlist(),
        }
    }

    fn of_mut(self, library: &mut UserLibrary) -> &mut ItemSet {
        match self {
            Collection::Favorites => library.favorites_mut(),
            Collection::Watchlist => library.watchlist_mut(),
        }
    }
}

/// Build the item to store: a bare local record when `title` is given,
/// otherwise the provider's summary.
fn resolve_item(
    ctx: &AppContext,
    key: MediaKey,
    title: Option<String>,
) -> Result<MediaItem, CliError> {
    if let Some(title) = title {
        return Ok(MediaItem::new(key.kind, key.id, title));
    }
    let client = ctx.tmdb_client()?;
    let details = ctx.block_on(&format!("Looking up {}...", key), client.details(key))??;
    if details.key() != key {
        log::info!(
            "{} is not on TMDB; using {} \"{}\"",
            format_key(key),
            format_key(details.key()),
            details.item.title
        );
    }
    Ok(details.item)
}

pub(crate) fn run_collection_list(ctx: &AppContext, collection: Collection) -> Result<(), CliError> {
    let library = ctx.open_library()?;
    let set = collection.of(&library);

    if set.is_empty() {
        log::info!("Your {} is empty.", collection.name());
        return Ok(());
    }

    log::info!(
        "{} ({})",
        collection.name().if_supports_color(Stdout, |t| t.bold()),
        set.len()
    );
    for item in set.items() {
        log::info!("  {}", format_item(item));
    }
    Ok(())
}

pub(crate) fn run_collection_add(
    ctx: &AppContext,
    collection: Collection,
    item: ItemArgs,
    title: Option<String>,
) -> Result<(), CliError> {
    let key = MediaKey::new(item.kind, item.id);
    let mut library = ctx.open_library()?;
    if collection.of(&library).contains(key) {
        log::info!("{} is already in your {}", format_key(key), collection.name());
        return Ok(());
    }

    let resolved = resolve_item(ctx, key, title)?;
    let line = format_item(&resolved);
    if collection.of_mut(&mut library).add(resolved) {
        log::info!(
            "{} Added to {}: {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            collection.name(),
            line
        );
    } else {
        log::info!("{} is already in your {}", line, collection.name());
    }
    Ok(())
}

pub(crate) fn run_collection_remove(
    ctx: &AppContext,
    collection: Collection,
    item: ItemArgs,
) -> Result<(), CliError> {
    let key = MediaKey::new(item.kind, item.id);
    let mut library = ctx.open_library()?;
    if collection.of_mut(&mut library).remove(key) {
        log::info!("Removed {} from {}", format_key(key), collection.name());
    } else {
        log::info!("{} was not in your {}", format_key(key), collection.name());
    }
    Ok(())
}

pub(crate) fn run_collection_toggle(
    ctx: &AppContext,
    collection: Collection,
    item: ItemArgs,
    title: Option<String>,
) -> Result<(), CliError> {
    let key = MediaKey::new(item.kind, item.id);
    let mut library = ctx.open_library()?;

    let target = match collection.of(&library).get(key) {
        Some(existing) => existing.clone(),
        None => resolve_item(ctx, key, title)?,
    };
    let line = format_item(&target);
    match collection.of_mut(&mut library).toggle(target) {
        Toggle::Added => log::info!("Added to {}: {}", collection.name(), line),
        Toggle::Removed => log::info!("Removed from {}: {}", collection.name(), line),
    }
    Ok(())
}

pub(crate) fn run_collection_clear(ctx: &AppContext, collection: Collection) -> Result<(), CliError> {
    let mut library = ctx.open_library()?;
    let set = collection.of_mut(&mut library);
    let count = set.len();
    set.clear();
    log::info!("Removed {} titles from {}", count, collection.name());
    Ok(())
}
