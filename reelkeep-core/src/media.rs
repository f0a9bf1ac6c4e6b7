use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MediaKeyParseError, MediaKindParseError};

/// Whether a catalog entry is a movie or a TV series.
///
/// The provider uses separate id namespaces for the two, so the kind is part
/// of every item's identity. It is decided once, when a provider payload is
/// converted, and carried explicitly from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

const ALL_KINDS: &[MediaKind] = &[MediaKind::Movie, MediaKind::Series];

impl MediaKind {
    /// Both kinds, movies first.
    pub fn all() -> &'static [MediaKind] {
        ALL_KINDS
    }

    /// Canonical lowercase name, also used in the textual key form.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
        }
    }

    /// Human-readable label for listings.
    pub fn display_name(self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::Series => "TV Series",
        }
    }

    /// Alternative spellings accepted by `FromStr`.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            MediaKind::Movie => &["film", "movies"],
            MediaKind::Series => &["tv", "show", "shows"],
        }
    }

    /// The other namespace. Used when a lookup under one kind is not found.
    pub fn other(self) -> MediaKind {
        match self {
            MediaKind::Movie => MediaKind::Series,
            MediaKind::Series => MediaKind::Movie,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = MediaKindParseError;

    /// Parse a kind from its canonical name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &kind in ALL_KINDS {
            if kind.as_str() == lower || kind.aliases().contains(&lower.as_str()) {
                return Ok(kind);
            }
        }
        Err(MediaKindParseError(s.to_string()))
    }
}

/// Composite identity of a catalog entry: `(kind, id)`.
///
/// Textual form is `movie:101` / `series:202`; this is also the object key
/// used in the persisted ratings and reviews documents. A bare number is
/// accepted when parsing and read as a movie, which is how keys were written
/// before series got their own namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaKey {
    pub kind: MediaKind,
    pub id: u64,
}

impl MediaKey {
    pub fn new(kind: MediaKind, id: u64) -> Self {
        Self { kind, id }
    }

    pub fn movie(id: u64) -> Self {
        Self::new(MediaKind::Movie, id)
    }

    pub fn series(id: u64) -> Self {
        Self::new(MediaKind::Series, id)
    }
}

impl fmt::Display for MediaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl FromStr for MediaKey {
    type Err = MediaKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = match s.split_once(':') {
            Some((kind, id)) => (kind.parse::<MediaKind>()?, id),
            None => (MediaKind::Movie, s),
        };
        let id: u64 = id
            .trim()
            .parse()
            .map_err(|_| MediaKeyParseError::Id(s.to_string()))?;
        if id == 0 {
            return Err(MediaKeyParseError::Id(s.to_string()));
        }
        Ok(Self { kind, id })
    }
}

impl Serialize for MediaKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MediaKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A movie or series as known to this system.
///
/// This is the record stored in the favorites and watchlist documents, so
/// its serialized shape is a persistence contract:
///
/// ```text
/// {"kind":"movie","id":101,"title":"Heat","posterPath":"/p.jpg","voteAverage":7.9,"genreIds":[80,18]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub kind: MediaKind,
    pub id: u64,
    /// Display title (the provider's `title` for movies, `name` for series).
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Provider community score, 0-10.
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<u32>>,
    /// Release date for movies, first air date for series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl MediaItem {
    /// A minimal item carrying only identity and title.
    pub fn new(kind: MediaKind, id: u64, title: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            title: title.into(),
            poster_path: None,
            vote_average: 0.0,
            genre_ids: None,
            release_date: None,
        }
    }

    pub fn key(&self) -> MediaKey {
        MediaKey::new(self.kind, self.id)
    }

    pub fn with_poster(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    pub fn with_vote_average(mut self, vote_average: f32) -> Self {
        self.vote_average = vote_average;
        self
    }

    pub fn with_genre_ids(mut self, ids: impl Into<Vec<u32>>) -> Self {
        self.genre_ids = Some(ids.into());
        self
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    /// Four-digit year from the release date, if present.
    pub fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
    }
}

/// A named genre as published by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

impl Genre {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Full display record for one item, including resolved genre names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetails {
    #[serde(flatten)]
    pub item: MediaItem,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Movies only.
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    /// Series only.
    #[serde(default)]
    pub season_count: Option<u32>,
    /// Series only.
    #[serde(default)]
    pub episode_count: Option<u32>,
}

impl MediaDetails {
    /// Details with nothing beyond the item and its genres.
    pub fn new(item: MediaItem, genres: Vec<Genre>) -> Self {
        Self {
            item,
            genres,
            overview: None,
            tagline: None,
            status: None,
            runtime_minutes: None,
            season_count: None,
            episode_count: None,
        }
    }

    pub fn key(&self) -> MediaKey {
        self.item.key()
    }

    /// Comma-separated genre names.
    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
