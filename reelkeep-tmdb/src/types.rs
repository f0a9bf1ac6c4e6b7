//! TMDB response payloads and their conversion into core types.
//!
//! This is the only place that knows a movie payload has `title` and
//! `release_date` while a TV payload has `name` and `first_air_date`. The
//! kind is fixed by which endpoint produced the payload.

use serde::{Deserialize, Serialize};

use reelkeep_core::{Genre, MediaDetails, MediaItem, MediaKind};

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl<T> Page<T> {
    /// The page returned for a blank search.
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// Paged envelope as sent on the wire.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageResponse<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> PageResponse<T> {
    pub fn into_page<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            results: self.results.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}

/// Movie entry in lists and search results.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
}

/// Series entry in lists and search results.
#[derive(Debug, Clone, Deserialize)]
pub struct TvSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailsResponse {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvDetailsResponse {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct GenreListResponse {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// One billed cast member from `/credits`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Billing position, lowest first.
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// A video attached to a title (trailer, teaser, clip).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Video {
    /// Site-specific id, e.g. the YouTube video id.
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(default, rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub official: bool,
}

impl Video {
    pub fn is_youtube_trailer(&self) -> bool {
        self.video_type == "Trailer" && self.site == "YouTube"
    }

    /// Watch URL for YouTube videos.
    pub fn youtube_url(&self) -> Option<String> {
        (self.site == "YouTube").then(|| format!("https://www.youtube.com/watch?v={}", self.key))
    }
}

/// The first YouTube trailer in provider order.
pub fn find_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|v| v.is_youtube_trailer())
}

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Error body TMDB sends with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status_message: Option<String>,
}

/// TMDB sends `""` for unknown dates and free text.
fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

impl From<MovieSummary> for MediaItem {
    fn from(m: MovieSummary) -> Self {
        MediaItem {
            kind: MediaKind::Movie,
            id: m.id,
            title: m.title,
            poster_path: non_empty(m.poster_path),
            vote_average: m.vote_average.unwrap_or(0.0),
            genre_ids: m.genre_ids,
            release_date: non_empty(m.release_date),
        }
    }
}

impl From<TvSummary> for MediaItem {
    fn from(t: TvSummary) -> Self {
        MediaItem {
            kind: MediaKind::Series,
            id: t.id,
            title: t.name,
            poster_path: non_empty(t.poster_path),
            vote_average: t.vote_average.unwrap_or(0.0),
            genre_ids: t.genre_ids,
            release_date: non_empty(t.first_air_date),
        }
    }
}

impl From<MovieDetailsResponse> for MediaDetails {
    fn from(m: MovieDetailsResponse) -> Self {
        let item = MediaItem {
            kind: MediaKind::Movie,
            id: m.id,
            title: m.title,
            poster_path: non_empty(m.poster_path),
            vote_average: m.vote_average.unwrap_or(0.0),
            genre_ids: Some(m.genres.iter().map(|g| g.id).collect()),
            release_date: non_empty(m.release_date),
        };
        MediaDetails {
            item,
            genres: m.genres,
            overview: non_empty(m.overview),
            tagline: non_empty(m.tagline),
            status: non_empty(m.status),
            runtime_minutes: m.runtime.filter(|&r| r > 0),
            season_count: None,
            episode_count: None,
        }
    }
}

impl From<TvDetailsResponse> for MediaDetails {
    fn from(t: TvDetailsResponse) -> Self {
        let item = MediaItem {
            kind: MediaKind::Series,
            id: t.id,
            title: t.name,
            poster_path: non_empty(t.poster_path),
            vote_average: t.vote_average.unwrap_or(0.0),
            genre_ids: Some(t.genres.iter().map(|g| g.id).collect()),
            release_date: non_empty(t.first_air_date),
        };
        MediaDetails {
            item,
            genres: t.genres,
            overview: non_empty(t.overview),
            tagline: non_empty(t.tagline),
            status: non_empty(t.status),
            runtime_minutes: None,
            season_count: t.number_of_seasons,
            episode_count: t.number_of_episodes,
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
