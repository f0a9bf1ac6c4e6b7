//! The user's four collections opened together over one store.

use std::path::PathBuf;
use std::sync::Arc;

use reelkeep_core::{CatalogProvider, MediaKey};
use reelkeep_store::{ItemSet, KvStore, Ratings, Reviews, StorageError};

use crate::enrich::{EnrichOptions, EnrichmentReport, enrich};
use crate::stats::{UserStats, compute_stats};

/// Favorites, watchlist, ratings and reviews sharing one [`KvStore`].
///
/// Constructed explicitly and passed to whoever needs it. Each collection
/// persists its own changes.
#[derive(Debug)]
pub struct UserLibrary {
    store: KvStore,
    schema_version: u32,
    favorites: ItemSet,
    watchlist: ItemSet,
    ratings: Ratings,
    reviews: Reviews,
}

impl UserLibrary {
    /// Check the stored schema and load every collection.
    pub fn open(store: KvStore) -> Self {
        let schema_version = store.check_schema();
        let library = Self {
            favorites: ItemSet::favorites(store.clone()),
            watchlist: ItemSet::watchlist(store.clone()),
            ratings: Ratings::load(store.clone()),
            reviews: Reviews::reviews(store.clone()),
            schema_version,
            store,
        };
        log::debug!(
            "Opened library: {} favorites, {} watchlist, {} ratings, {} reviews",
            library.favorites.len(),
            library.watchlist.len(),
            library.ratings.len(),
            library.reviews.len()
        );
        library
    }

    /// Open a library stored under `dir`.
    pub fn open_dir(dir: impl Into<PathBuf>, quota: Option<u64>) -> Result<Self, StorageError> {
        Ok(Self::open(KvStore::open_dir(dir, quota)?))
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn favorites(&self) -> &ItemSet {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut ItemSet {
        &mut self.favorites
    }

    pub fn watchlist(&self) -> &ItemSet {
        &self.watchlist
    }

    pub fn watchlist_mut(&mut self) -> &mut ItemSet {
        &mut self.watchlist
    }

    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    pub fn ratings_mut(&mut self) -> &mut Ratings {
        &mut self.ratings
    }

    pub fn reviews(&self) -> &Reviews {
        &self.reviews
    }

    pub fn reviews_mut(&mut self) -> &mut Reviews {
        &mut self.reviews
    }

    /// Stats from local data only. `top_genres` is always empty.
    pub fn local_stats(&self) -> UserStats {
        compute_stats(self.ratings.as_map(), self.reviews.as_map(), &[])
    }

    /// Stats with genres resolved through `provider`.
    ///
    /// Rated keys that cannot be resolved are left out of the genre ranking
    /// and listed in the returned report.
    pub async fn stats<P>(
        &self,
        provider: Arc<P>,
        options: &EnrichOptions,
    ) -> (UserStats, EnrichmentReport)
    where
        P: CatalogProvider + 'static,
    {
        let keys: Vec<MediaKey> = self.ratings.keys().collect();
        let report = enrich(provider, keys, options).await;
        let stats = compute_stats(self.ratings.as_map(), self.reviews.as_map(), &report.items);
        (stats, report)
    }
}
