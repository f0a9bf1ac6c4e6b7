use std::future::Future;

use serde::de::DeserializeOwned;

use reelkeep_core::{CatalogProvider, Genre, MediaDetails, MediaItem, MediaKey, MediaKind};

use crate::config::TmdbConfig;
use crate::error::TmdbError;
use crate::images::{ImageKind, ImageSize, image_url};
use crate::listing::{self, ListCategory};
use crate::types::{
    CastMember, CreditsResponse, ErrorBody, GenreListResponse, MovieDetailsResponse,
    MovieSummary, Page, PageResponse, TvDetailsResponse, TvSummary, Video, VideoListResponse,
};

/// Longest response excerpt included in parse errors.
const EXCERPT_CHARS: usize = 200;

fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}

/// HTTP client for the TMDB v3 API.
pub struct TmdbClient {
    http: reqwest::Client,
    config: TmdbConfig,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self, TmdbError> {
        if config.api_key.trim().is_empty() {
            return Err(TmdbError::Config("TMDB API key is empty".to_string()));
        }
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// Poster URL for an item, if it has one.
    pub fn poster_url(&self, item: &MediaItem, size: ImageSize) -> Option<String> {
        image_url(
            &self.config.image_base_url,
            item.poster_path.as_deref(),
            ImageKind::Poster,
            size,
        )
    }

    /// Profile photo URL for a cast member, if they have one.
    pub fn profile_url(&self, member: &CastMember, size: ImageSize) -> Option<String> {
        image_url(
            &self.config.image_base_url,
            member.profile_path.as_deref(),
            ImageKind::Profile,
            size,
        )
    }

    /// GET `path` with the API key and `params`, mapping failure statuses to
    /// typed errors.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        log::debug!("TMDB GET {}", path);

        let resp = self
            .http
            .get(format!("{}{}", self.config.base_url, path))
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TmdbError::InvalidApiKey);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TmdbError::NotFound {
                path: path.to_string(),
            });
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TmdbError::RateLimit);
        }
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or_else(|| excerpt(&text));
            return Err(TmdbError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            TmdbError::Api(format!(
                "Failed to parse {}: {e}. Response: {}",
                path,
                excerpt(&text)
            ))
        })
    }

    async fn get_page(
        &self,
        kind: MediaKind,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Page<MediaItem>, TmdbError> {
        match kind {
            MediaKind::Movie => Ok(self
                .get_json::<PageResponse<MovieSummary>>(path, params)
                .await?
                .into_page(MediaItem::from)),
            MediaKind::Series => Ok(self
                .get_json::<PageResponse<TvSummary>>(path, params)
                .await?
                .into_page(MediaItem::from)),
        }
    }

    /// One page of a curated list (popular, top rated, trending, current).
    pub async fn list(
        &self,
        kind: MediaKind,
        category: ListCategory,
        page: u32,
    ) -> Result<Page<MediaItem>, TmdbError> {
        self.get_page(kind, category.endpoint(kind), &[("page", page.max(1).to_string())])
            .await
    }

    /// Search by title. A blank query returns an empty page without a request.
    pub async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
    ) -> Result<Page<MediaItem>, TmdbError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Page::empty());
        }
        self.get_page(
            kind,
            listing::search_path(kind),
            &[("query", query.to_string()), ("page", page.max(1).to_string())],
        )
        .await
    }

    /// Items similar to `key`.
    pub async fn similar(&self, key: MediaKey, page: u32) -> Result<Page<MediaItem>, TmdbError> {
        self.get_page(
            key.kind,
            &listing::similar_path(key),
            &[("page", page.max(1).to_string())],
        )
        .await
    }

    /// Genre list for a kind.
    pub async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>, TmdbError> {
        let resp: GenreListResponse = self.get_json(listing::genres_path(kind), &[]).await?;
        Ok(resp.genres)
    }

    /// Cast of `key` in billing order.
    pub async fn credits(&self, key: MediaKey) -> Result<Vec<CastMember>, TmdbError> {
        let resp: CreditsResponse = self.get_json(&listing::credits_path(key), &[]).await?;
        let mut cast = resp.cast;
        cast.sort_by_key(|c| c.order);
        Ok(cast)
    }

    /// Trailers, teasers and clips for `key`, in provider order.
    pub async fn videos(&self, key: MediaKey) -> Result<Vec<Video>, TmdbError> {
        let resp: VideoListResponse = self.get_json(&listing::videos_path(key), &[]).await?;
        Ok(resp.results)
    }

    /// Details for exactly `key`, without falling back to the other kind.
    pub async fn details_exact(&self, key: MediaKey) -> Result<MediaDetails, TmdbError> {
        let path = listing::details_path(key);
        match key.kind {
            MediaKind::Movie => Ok(self.get_json::<MovieDetailsResponse>(&path, &[]).await?.into()),
            MediaKind::Series => Ok(self.get_json::<TvDetailsResponse>(&path, &[]).await?.into()),
        }
    }

    /// Details for `key`. If the id is unknown under `key.kind`, the other
    /// kind is tried; the returned details carry the kind actually found.
    pub async fn details(&self, key: MediaKey) -> Result<MediaDetails, TmdbError> {
        match self.details_exact(key).await {
            Err(e) if e.is_not_found() => {
                let alternate = MediaKey::new(key.kind.other(), key.id);
                log::debug!("{} not found, trying {}", key, alternate);
                self.details_exact(alternate).await
            }
            other => other,
        }
    }
}

impl CatalogProvider for TmdbClient {
    type Error = TmdbError;

    fn media_details(
        &self,
        key: MediaKey,
    ) -> impl Future<Output = Result<MediaDetails, Self::Error>> + Send {
        self.details(key)
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
