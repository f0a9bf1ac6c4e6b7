//! Ordered sets of media items (favorites, watchlist).

use reelkeep_core::{MediaItem, MediaKey};

use crate::keys;
use crate::kv::{KvStore, Stored};

/// Outcome of [`ItemSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// A persisted, insertion-ordered set of [`MediaItem`]s with unique keys.
///
/// Stored as one JSON array under a fixed key. Every mutation that changes
/// the set rewrites the whole document immediately.
#[derive(Debug)]
pub struct ItemSet {
    store: KvStore,
    key: &'static str,
    items: Vec<MediaItem>,
    /// Entries that did not parse, written back after `items`.
    unparsed: Vec<serde_json::Value>,
}

impl ItemSet {
    /// Load the set stored under `key`, starting empty if there is none.
    ///
    /// Repeats of a key already seen are dropped with a warning. Entries
    /// that fail to deserialize are hidden from the set but kept on disk.
    pub fn load(store: KvStore, key: &'static str) -> Self {
        let raw: Vec<serde_json::Value> = store.read(key, Vec::new());
        let mut items: Vec<MediaItem> = Vec::with_capacity(raw.len());
        let mut unparsed = Vec::new();
        for value in raw {
            match serde_json::from_value::<MediaItem>(value.clone()) {
                Ok(item) if items.iter().any(|i| i.key() == item.key()) => {
                    log::warn!("Dropping duplicate {} in {key}", item.key());
                }
                Ok(item) => items.push(item),
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {key}: {e}");
                    unparsed.push(value);
                }
            }
        }
        Self {
            store,
            key,
            items,
            unparsed,
        }
    }

    pub fn favorites(store: KvStore) -> Self {
        Self::load(store, keys::FAVORITES)
    }

    pub fn watchlist(store: KvStore) -> Self {
        Self::load(store, keys::WATCHLIST)
    }

    /// The storage key this set persists under.
    pub fn storage_key(&self) -> &'static str {
        self.key
    }

    pub fn contains(&self, key: MediaKey) -> bool {
        self.items.iter().any(|i| i.key() == key)
    }

    pub fn get(&self, key: MediaKey) -> Option<&MediaItem> {
        self.items.iter().find(|i| i.key() == key)
    }

    /// Append `item` unless its key is already present. Returns whether the
    /// set changed.
    pub fn add(&mut self, item: MediaItem) -> bool {
        if self.contains(item.key()) {
            return false;
        }
        self.items.push(item);
        self.persist();
        true
    }

    /// Remove the item with `key`. Absent keys are a no-op.
    pub fn remove(&mut self, key: MediaKey) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.key() != key);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    pub fn toggle(&mut self, item: MediaItem) -> Toggle {
        if self.remove(item.key()) {
            Toggle::Removed
        } else {
            self.add(item);
            Toggle::Added
        }
    }

    /// Remove every item, including entries this build could not read.
    pub fn clear(&mut self) {
        if self.items.is_empty() && self.unparsed.is_empty() {
            return;
        }
        self.items.clear();
        self.unparsed.clear();
        self.persist();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn keys(&self) -> impl Iterator<Item = MediaKey> + '_ {
        self.items.iter().map(MediaItem::key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of stored entries hidden because they could not be parsed.
    pub fn unreadable_len(&self) -> usize {
        self.unparsed.len()
    }

    fn persist(&self) {
        let doc: Vec<Stored<'_, MediaItem>> = self
            .items
            .iter()
            .map(Stored::Parsed)
            .chain(self.unparsed.iter().map(Stored::Raw))
            .collect();
        self.store.write(self.key, &doc);
    }
}
