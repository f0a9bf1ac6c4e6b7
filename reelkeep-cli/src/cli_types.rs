//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use reelkeep_core::MediaKind;
use reelkeep_tmdb::ListCategory;

#[derive(Parser)]
#[command(name = "reelkeep")]
#[command(
    about = "Browse movies and TV series and keep your favorites, watchlist, ratings and reviews",
    long_about = None
)]
pub(crate) struct Cli {
    /// Directory holding your collections (overrides REELKEEP_DATA_DIR and settings)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Identifies one movie or series.
#[derive(Args, Clone, Copy)]
pub(crate) struct ItemArgs {
    /// movie or series (aliases: film, tv, show)
    pub kind: MediaKind,

    /// TMDB id
    pub id: u64,
}

/// Paging and client-side filtering for catalog listings.
#[derive(Args, Clone, Copy)]
pub(crate) struct ListingArgs {
    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Only show items tagged with this genre id (see `reelkeep genres`)
    #[arg(long)]
    pub genre: Option<u32>,

    /// Only show items with at least this community score (0-10)
    #[arg(long)]
    pub min_rating: Option<f32>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Manage your favorites
    Favorites {
        #[command(subcommand)]
        action: CollectionAction,
    },

    /// Manage your watchlist
    Watchlist {
        #[command(subcommand)]
        action: CollectionAction,
    },

    /// Manage your star ratings (1-5)
    Rate {
        #[command(subcommand)]
        action: RateAction,
    },

    /// Manage your written reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },

    /// Show totals, average rating and favorite genres
    Stats {
        /// Skip TMDB lookups (no genre ranking)
        #[arg(long)]
        offline: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse a curated TMDB list
    Browse {
        kind: MediaKind,

        /// popular, top-rated, trending or current
        category: ListCategory,

        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Search TMDB by title
    Search {
        kind: MediaKind,

        query: String,

        #[command(flatten)]
        listing: ListingArgs,
    },

    /// List genre ids and names
    Genres { kind: MediaKind },

    /// Show details for one title, along with your own notes on it
    Show {
        #[command(flatten)]
        item: ItemArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum CollectionAction {
    /// List saved titles
    List,

    /// Add a title (looked up on TMDB unless --title is given)
    Add {
        #[command(flatten)]
        item: ItemArgs,

        /// Store this title without a TMDB lookup
        #[arg(long)]
        title: Option<String>,
    },

    /// Remove a title
    Remove {
        #[command(flatten)]
        item: ItemArgs,
    },

    /// Add the title if absent, remove it if present
    Toggle {
        #[command(flatten)]
        item: ItemArgs,

        /// Store this title without a TMDB lookup
        #[arg(long)]
        title: Option<String>,
    },

    /// Remove every title
    Clear,
}

#[derive(Subcommand)]
pub(crate) enum RateAction {
    /// Rate a title from 1 to 5 stars
    Set {
        #[command(flatten)]
        item: ItemArgs,

        #[arg(allow_negative_numbers = true)]
        stars: i64,
    },

    /// Show your rating for a title
    Get {
        #[command(flatten)]
        item: ItemArgs,
    },

    /// Remove your rating for a title
    Remove {
        #[command(flatten)]
        item: ItemArgs,
    },

    /// List all ratings
    List,
}

#[derive(Subcommand)]
pub(crate) enum ReviewAction {
    /// Write or replace your review of a title
    Set {
        #[command(flatten)]
        item: ItemArgs,

        text: String,
    },

    /// Show your review of a title
    Get {
        #[command(flatten)]
        item: ItemArgs,
    },

    /// Delete your review of a title
    Remove {
        #[command(flatten)]
        item: ItemArgs,
    },

    /// List all reviews
    List,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each value came from
    Show,

    /// Print the settings file path
    Path,

    /// Save the TMDB API key to the settings file
    SetApiKey { key: String },

    /// Save the data directory to the settings file
    SetDataDir { path: PathBuf },
}
