//! Fixed storage keys, one per persisted document.

pub const FAVORITES: &str = "movie_favorites";
pub const WATCHLIST: &str = "movie_watchlist";
pub const RATINGS: &str = "movie_ratings";
pub const REVIEWS: &str = "movie_reviews";

/// Holds `{"version": N}` describing the layout of the documents above.
pub const SCHEMA: &str = "schema";

/// Layout version written by this build. Bump when a stored document shape
/// changes incompatibly.
pub const SCHEMA_VERSION: u32 = 1;
