//! Catalog commands backed by TMDB: `browse`, `search`, `genres`, `show`.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelkeep_core::{Genre, MediaItem, MediaKey, MediaKind};
use reelkeep_lib::{MediaFilter, UserLibrary};
use reelkeep_tmdb::{ImageSize, ListCategory, Page, Video, find_trailer};

use super::{AppContext, format_item, format_key};
use crate::CliError;
use crate::cli_types::{ItemArgs, ListingArgs};

/// Billed cast members shown by `show`.
const CAST_LIMIT: usize = 12;

fn filter_for(listing: &ListingArgs) -> MediaFilter {
    MediaFilter::new()
        .with_genre(listing.genre)
        .with_min_rating(listing.min_rating)
}

fn print_page(
    heading: &str,
    page: Page<MediaItem>,
    filter: &MediaFilter,
    genres: &[Genre],
    library: Option<&UserLibrary>,
) {
    let total = page.results.len();
    let kept = filter.apply(page.results);

    log::info!(
        "{} {}",
        heading.if_supports_color(Stdout, |t| t.bold()),
        format!("(page {} of {})", page.page, page.total_pages.max(1))
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    if filter.is_active() {
        let mut parts = Vec::new();
        if let Some(id) = filter.genre {
            let name = genres
                .iter()
                .find(|g| g.id == id)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| format!("genre {}", id));
            parts.push(name);
        }
        if let Some(min) = filter.min_rating.filter(|&m| m > 0.0) {
            parts.push(format!("score >= {:.1}", min));
        }
        log::info!(
            "  {}",
            format!("Filtered by {}: {} of {} shown", parts.join(", "), kept.len(), total)
                .if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    crate::log_blank();

    if kept.is_empty() {
        log::info!("  No results.");
        return;
    }
    for item in &kept {
        let marks = library.map(|lib| marks_for(lib, item.key())).unwrap_or_default();
        log::info!("  {}{}", format_item(item), marks);
    }
}

/// Suffix flagging titles already in the user's collections.
fn marks_for(library: &UserLibrary, key: MediaKey) -> String {
    let mut marks = String::new();
    if library.favorites().contains(key) {
        marks.push_str(&format!(" {}", "\u{2665}".if_supports_color(Stdout, |t| t.red())));
    }
    if library.watchlist().contains(key) {
        marks.push_str(&format!(" {}", "[watchlist]".if_supports_color(Stdout, |t| t.cyan())));
    }
    if let Some(rating) = library.ratings().get(key) {
        marks.push_str(&format!(
            " {}",
            rating.stars().if_supports_color(Stdout, |t| t.yellow())
        ));
    }
    marks
}

/// The library is only used for decoration here, so failing to open it is
/// not fatal.
fn try_library(ctx: &AppContext) -> Option<UserLibrary> {
    match ctx.open_library() {
        Ok(lib) => Some(lib),
        Err(e) => {
            log::debug!("Library unavailable: {}", e);
            None
        }
    }
}

pub(crate) fn run_browse(
    ctx: &AppContext,
    kind: MediaKind,
    category: ListCategory,
    listing: ListingArgs,
) -> Result<(), CliError> {
    let client = ctx.tmdb_client()?;
    let filter = filter_for(&listing);
    let heading = format!("{} {}", category.title(kind), kind.display_name());

    let (page, genres) = if filter.genre.is_some() {
        ctx.block_on(&format!("Loading {}...", heading), async {
            futures::try_join!(client.list(kind, category, listing.page), client.genres(kind))
        })??
    } else {
        let page = ctx.block_on(
            &format!("Loading {}...", heading),
            client.list(kind, category, listing.page),
        )??;
        (page, Vec::new())
    };

    print_page(&heading, page, &filter, &genres, try_library(ctx).as_ref());
    Ok(())
}

pub(crate) fn run_search(
    ctx: &AppContext,
    kind: MediaKind,
    query: &str,
    listing: ListingArgs,
) -> Result<(), CliError> {
    if query.trim().is_empty() {
        log::info!("Nothing to search for.");
        return Ok(());
    }
    let client = ctx.tmdb_client()?;
    let filter = filter_for(&listing);
    let heading = format!("{} matching \"{}\"", kind.display_name(), query.trim());

    let (page, genres) = if filter.genre.is_some() {
        ctx.block_on("Searching...", async {
            futures::try_join!(client.search(kind, query, listing.page), client.genres(kind))
        })??
    } else {
        let page = ctx.block_on("Searching...", client.search(kind, query, listing.page))??;
        (page, Vec::new())
    };

    print_page(&heading, page, &filter, &genres, try_library(ctx).as_ref());
    Ok(())
}

pub(crate) fn run_genres(ctx: &AppContext, kind: MediaKind) -> Result<(), CliError> {
    let client = ctx.tmdb_client()?;
    let genres = ctx.block_on("Loading genres...", client.genres(kind))??;

    log::info!(
        "{} genres",
        kind.display_name().if_supports_color(Stdout, |t| t.bold())
    );
    for genre in &genres {
        log::info!(
            "  {:>6}  {}",
            genre.id.if_supports_color(Stdout, |t| t.dimmed()),
            genre.name
        );
    }
    Ok(())
}

pub(crate) fn run_show(ctx: &AppContext, item: ItemArgs) -> Result<(), CliError> {
    let requested = MediaKey::new(item.kind, item.id);
    let client = ctx.tmdb_client()?;
    let details = ctx.block_on(&format!("Loading {}...", requested), client.details(requested))??;
    let found = details.key();

    log::info!("{}", format_item(&details.item));
    if found != requested {
        log::info!(
            "  {}",
            format!("({} not found; showing {})", requested, found)
                .if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    if let Some(tagline) = &details.tagline {
        log::info!("  {}", tagline.if_supports_color(Stdout, |t| t.italic()));
    }
    crate::log_blank();

    if !details.genres.is_empty() {
        log::info!("  Genres:   {}", details.genre_names());
    }
    if let Some(status) = &details.status {
        log::info!("  Status:   {}", status);
    }
    if let Some(runtime) = details.runtime_minutes {
        log::info!("  Runtime:  {}h {:02}m", runtime / 60, runtime % 60);
    }
    if let (Some(seasons), Some(episodes)) = (details.season_count, details.episode_count) {
        log::info!("  Seasons:  {} ({} episodes)", seasons, episodes);
    }
    if let Some(url) = client.poster_url(&details.item, ImageSize::Large) {
        log::info!("  Poster:   {}", url.if_supports_color(Stdout, |t| t.dimmed()));
    }
    if let Some(overview) = &details.overview {
        crate::log_blank();
        log::info!("  {}", overview);
    }

    if let Some(library) = try_library(ctx) {
        // Notes may sit under either key when the kind was corrected.
        let keys = if found == requested {
            vec![found]
        } else {
            vec![found, requested]
        };
        let mut notes = Vec::new();
        for key in keys {
            if library.favorites().contains(key) {
                notes.push("In your favorites".to_string());
            }
            if library.watchlist().contains(key) {
                notes.push("On your watchlist".to_string());
            }
            if let Some(rating) = library.ratings().get(key) {
                notes.push(format!("Your rating: {}", rating.stars()));
            }
            if let Some(review) = library.reviews().get(key) {
                notes.push(format!("Your review: {}", review));
            }
        }
        if !notes.is_empty() {
            crate::log_blank();
            for note in notes {
                log::info!("  {}", note.if_supports_color(Stdout, |t| t.green()));
            }
        }
    }

    let (similar, cast, videos) = ctx.block_on("Loading cast and similar titles...", async {
        futures::join!(
            client.similar(found, 1),
            client.credits(found),
            client.videos(found)
        )
    })?;

    match videos {
        Ok(videos) => {
            if let Some(url) = find_trailer(&videos).and_then(Video::youtube_url) {
                crate::log_blank();
                log::info!("  Trailer:  {}", url.if_supports_color(Stdout, |t| t.cyan()));
            }
        }
        Err(e) => log::debug!("Videos unavailable for {}: {}", format_key(found), e),
    }

    match cast {
        Ok(cast) if !cast.is_empty() => {
            crate::log_blank();
            log::info!("  {}", "Cast".if_supports_color(Stdout, |t| t.bold()));
            for member in cast.iter().take(CAST_LIMIT) {
                let role = member
                    .character
                    .as_deref()
                    .filter(|c| !c.is_empty())
                    .map(|c| format!(" as {}", c))
                    .unwrap_or_default();
                match client.profile_url(member, ImageSize::Medium) {
                    Some(url) => log::info!(
                        "    {}{} {}",
                        member.name,
                        role,
                        url.if_supports_color(Stdout, |t| t.dimmed())
                    ),
                    None => log::info!("    {}{}", member.name, role),
                }
            }
        }
        Ok(_) => {}
        Err(e) => log::debug!("Cast unavailable for {}: {}", format_key(found), e),
    }

    match similar {
        Ok(page) if !page.results.is_empty() => {
            crate::log_blank();
            log::info!("  {}", "Similar".if_supports_color(Stdout, |t| t.bold()));
            for item in page.results.iter().take(5) {
                log::info!("    {}", format_item(item));
            }
        }
        Ok(_) => {}
        Err(e) => log::debug!("Similar titles unavailable for {}: {}", format_key(found), e),
    }
    Ok(())
}
