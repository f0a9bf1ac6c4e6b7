//! `review` subcommands.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelkeep_core::MediaKey;

use super::{AppContext, format_key, label};
use crate::CliError;
use crate::cli_types::ItemArgs;

pub(crate) fn run_review_set(ctx: &AppContext, item: ItemArgs, text: String) -> Result<(), CliError> {
    let key = MediaKey::new(item.kind, item.id);
    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(CliError::other(
            "Review text is empty (use `reelkeep review remove` to delete a review)",
        ));
    }
    let mut library = ctx.open_library()?;
    let replaced = library.reviews().contains(key);
    library.reviews_mut().set(key, text);
    log::info!(
        "{} review for {}",
        if replaced { "Updated" } else { "Saved" },
        label(&library, key)
    );
    Ok(())
}

pub(crate) fn run_review_get(ctx: &AppContext, item: ItemArgs) -> Result<(), CliError> {
    let key = MediaKey::new(item.kind, item.id);
    let library = ctx.open_library()?;
    match library.reviews().get(key) {
        Some(text) => {
            log::info!("{}", label(&library, key));
            log::info!("  {}", text);
        }
        None => log::info!("You have not reviewed {}", format_key(key)),
    }
    Ok(())
}

pub(crate) fn run_review_remove(ctx: &AppContext, item: ItemArgs) -> Result<(), CliError> {
    let key = MediaKey::new(item.kind, item.id);
    let mut library = ctx.open_library()?;
    if library.reviews_mut().remove(key) {
        log::info!("Deleted your review of {}", format_key(key));
    } else {
        log::info!("You have not reviewed {}", format_key(key));
    }
    Ok(())
}

pub(crate) fn run_review_list(ctx: &AppContext) -> Result<(), CliError> {
    let library = ctx.open_library()?;
    let reviews = library.reviews();
    if reviews.is_empty() {
        log::info!("No reviews yet.");
        return Ok(());
    }

    log::info!(
        "{} ({})",
        "Reviews".if_supports_color(Stdout, |t| t.bold()),
        reviews.len()
    );
    for (key, text) in reviews.iter() {
        crate::log_blank();
        log::info!("  {}", label(&library, *key));
        log::info!("    {}", text);
    }
    Ok(())
}
