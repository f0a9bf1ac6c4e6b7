//! Application layer over the reelkeep store: the user library, stats,
//! enrichment through a catalog provider, listing filters and settings.

pub mod enrich;
pub mod error;
pub mod filter;
pub mod library;
pub mod settings;
pub mod stats;
pub mod worker_pool;

pub use enrich::{
    EnrichOptions, EnrichedItem, EnrichmentReport, UnenrichReason, Unenriched, enrich,
};
pub use error::ConfigError;
pub use filter::MediaFilter;
pub use library::UserLibrary;
pub use settings::{DATA_DIR_ENV, SettingSource, Settings};
pub use stats::{GenreCount, TOP_GENRE_LIMIT, UserStats, compute_stats};
pub use worker_pool::WorkerPool;
