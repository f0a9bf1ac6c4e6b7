use reelkeep_core::{MediaKey, MediaKind};

/// Curated lists the provider publishes for both movies and series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCategory {
    Popular,
    TopRated,
    /// Weekly trending.
    Trending,
    /// Now playing in cinemas (movies) or currently airing (series).
    Current,
}

const ALL_CATEGORIES: &[ListCategory] = &[
    ListCategory::Popular,
    ListCategory::TopRated,
    ListCategory::Trending,
    ListCategory::Current,
];

impl ListCategory {
    pub fn all() -> &'static [ListCategory] {
        ALL_CATEGORIES
    }

    pub fn short_name(self) -> &'static str {
        match self {
            ListCategory::Popular => "popular",
            ListCategory::TopRated => "top-rated",
            ListCategory::Trending => "trending",
            ListCategory::Current => "current",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ListCategory::Popular => &[],
            ListCategory::TopRated => &["top_rated", "toprated", "top"],
            ListCategory::Trending => &["trend"],
            ListCategory::Current => &["now-playing", "now_playing", "on-the-air", "on_the_air"],
        }
    }

    /// API path for this list under the given kind.
    pub fn endpoint(self, kind: MediaKind) -> &'static str {
        match (kind, self) {
            (MediaKind::Movie, ListCategory::Popular) => "/movie/popular",
            (MediaKind::Movie, ListCategory::TopRated) => "/movie/top_rated",
            (MediaKind::Movie, ListCategory::Trending) => "/trending/movie/week",
            (MediaKind::Movie, ListCategory::Current) => "/movie/now_playing",
            (MediaKind::Series, ListCategory::Popular) => "/tv/popular",
            (MediaKind::Series, ListCategory::TopRated) => "/tv/top_rated",
            (MediaKind::Series, ListCategory::Trending) => "/trending/tv/week",
            (MediaKind::Series, ListCategory::Current) => "/tv/on_the_air",
        }
    }

    /// Heading for listings, e.g. "Top Rated" / "Now Playing".
    pub fn title(self, kind: MediaKind) -> &'static str {
        match (kind, self) {
            (_, ListCategory::Popular) => "Popular",
            (_, ListCategory::TopRated) => "Top Rated",
            (_, ListCategory::Trending) => "Trending This Week",
            (MediaKind::Movie, ListCategory::Current) => "Now Playing",
            (MediaKind::Series, ListCategory::Current) => "On The Air",
        }
    }
}

impl std::fmt::Display for ListCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Error returned when a string cannot be parsed into a `ListCategory`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown list: '{0}' (expected popular, top-rated, trending or current)")]
pub struct ListCategoryParseError(pub String);

impl std::str::FromStr for ListCategory {
    type Err = ListCategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &category in ALL_CATEGORIES {
            if category.short_name() == lower || category.aliases().contains(&lower.as_str()) {
                return Ok(category);
            }
        }
        Err(ListCategoryParseError(s.to_string()))
    }
}

pub(crate) fn details_path(key: MediaKey) -> String {
    match key.kind {
        MediaKind::Movie => format!("/movie/{}", key.id),
        MediaKind::Series => format!("/tv/{}", key.id),
    }
}

pub(crate) fn similar_path(key: MediaKey) -> String {
    format!("{}/similar", details_path(key))
}

pub(crate) fn credits_path(key: MediaKey) -> String {
    format!("{}/credits", details_path(key))
}

pub(crate) fn videos_path(key: MediaKey) -> String {
    format!("{}/videos", details_path(key))
}

pub(crate) fn search_path(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "/search/movie",
        MediaKind::Series => "/search/tv",
    }
}

pub(crate) fn genres_path(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "/genre/movie/list",
        MediaKind::Series => "/genre/tv/list",
    }
}

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod tests;
