//! Persisted maps from media key to a value (ratings, reviews).

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde::de::DeserializeOwned;

use reelkeep_core::{MediaKey, Rating, ValidationError};

use crate::keys;
use crate::kv::{KvStore, Stored};

pub type RatingMap = BTreeMap<MediaKey, Rating>;
pub type ReviewMap = BTreeMap<MediaKey, String>;

/// A `MediaKey -> V` map persisted as one JSON object under a fixed key.
///
/// Writes are last-write-wins with no versioning. Every change rewrites the
/// whole document.
#[derive(Debug)]
pub struct KeyedMap<V> {
    store: KvStore,
    key: &'static str,
    entries: BTreeMap<MediaKey, V>,
    /// Pairs that did not parse, keyed by their raw key. Written back as-is.
    unparsed: BTreeMap<String, serde_json::Value>,
}

impl<V> KeyedMap<V>
where
    V: Serialize + DeserializeOwned,
{
    /// Load the map under `key`. Entries whose key or value does not parse
    /// are skipped with a warning instead of discarding the whole document,
    /// and kept so later writes do not delete them.
    ///
    /// A legacy bare id and its composite form (`"101"` and `"movie:101"`)
    /// name the same entry; the composite one wins.
    pub fn load(store: KvStore, key: &'static str) -> Self {
        let raw: BTreeMap<String, serde_json::Value> = store.read(key, BTreeMap::new());
        let mut entries = BTreeMap::new();
        let mut canonical = BTreeSet::new();
        let mut unparsed = BTreeMap::new();
        for (k, v) in raw {
            let media_key = match k.parse::<MediaKey>() {
                Ok(mk) => mk,
                Err(e) => {
                    log::warn!("Skipping entry in {key} with bad key '{k}': {e}");
                    unparsed.insert(k, v);
                    continue;
                }
            };
            let value = match serde_json::from_value::<V>(v.clone()) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("Skipping entry {media_key} in {key}: {e}");
                    unparsed.insert(k, v);
                    continue;
                }
            };
            let is_canonical = k == media_key.to_string();
            if entries.contains_key(&media_key) {
                if !is_canonical && canonical.contains(&media_key) {
                    log::warn!("Dropping duplicate {media_key} in {key} (legacy key '{k}')");
                    continue;
                }
                log::warn!("Dropping duplicate {media_key} in {key}, keeping '{k}'");
            }
            if is_canonical {
                canonical.insert(media_key);
            }
            entries.insert(media_key, value);
        }
        Self {
            store,
            key,
            entries,
            unparsed,
        }
    }

    pub fn storage_key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self, key: MediaKey) -> Option<&V> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: MediaKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Insert or overwrite.
    pub fn set(&mut self, key: MediaKey, value: V) {
        self.unparsed.remove(&key.to_string());
        self.entries.insert(key, value);
        self.persist();
    }

    /// Delete the entry if present. Absent keys are a no-op.
    pub fn remove(&mut self, key: MediaKey) -> bool {
        if self.entries.remove(&key).is_none() {
            return false;
        }
        self.unparsed.remove(&key.to_string());
        self.persist();
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MediaKey, &V)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = MediaKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<MediaKey, V> {
        &self.entries
    }

    /// Number of stored entries hidden because they could not be parsed.
    pub fn unreadable_len(&self) -> usize {
        self.unparsed.len()
    }

    fn persist(&self) {
        let mut doc: BTreeMap<String, Stored<'_, V>> = self
            .unparsed
            .iter()
            .map(|(k, v)| (k.clone(), Stored::Raw(v)))
            .collect();
        for (k, v) in &self.entries {
            doc.insert(k.to_string(), Stored::Parsed(v));
        }
        self.store.write(self.key, &doc);
    }
}

pub type Reviews = KeyedMap<String>;

impl KeyedMap<String> {
    pub fn reviews(store: KvStore) -> Self {
        Self::load(store, keys::REVIEWS)
    }
}

/// Star ratings, validated to `1..=5` at the write boundary.
///
/// Stored values outside the range (written by an older build or edited by
/// hand) are skipped on load but left in the document.
#[derive(Debug)]
pub struct Ratings {
    inner: KeyedMap<Rating>,
}

impl Ratings {
    pub fn load(store: KvStore) -> Self {
        Self {
            inner: KeyedMap::load(store, keys::RATINGS),
        }
    }

    pub fn get(&self, key: MediaKey) -> Option<Rating> {
        self.inner.get(key).copied()
    }

    /// Set a rating from a raw integer, rejecting anything outside `1..=5`
    /// without touching stored state.
    pub fn set(&mut self, key: MediaKey, value: i64) -> Result<Rating, ValidationError> {
        let rating = Rating::new(value)?;
        self.set_rating(key, rating);
        Ok(rating)
    }

    pub fn set_rating(&mut self, key: MediaKey, rating: Rating) {
        self.inner.set(key, rating);
    }

    pub fn remove(&mut self, key: MediaKey) -> bool {
        self.inner.remove(key)
    }

    pub fn contains(&self, key: MediaKey) -> bool {
        self.inner.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MediaKey, &Rating)> {
        self.inner.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = MediaKey> + '_ {
        self.inner.keys()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn unreadable_len(&self) -> usize {
        self.inner.unreadable_len()
    }

    pub fn as_map(&self) -> &RatingMap {
        self.inner.as_map()
    }
}
