//! Fail-soft JSON documents over a [`StorageBackend`].

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::{FileBackend, MemoryBackend, StorageBackend};
use crate::error::StorageError;
use crate::keys;

/// One entry of a collection document as written back to storage.
///
/// `Raw` holds an entry this build could not parse. It is written back
/// unchanged so documents from newer builds survive a round trip.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum Stored<'a, T> {
    Parsed(&'a T),
    Raw(&'a serde_json::Value),
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct SchemaMeta {
    version: u32,
}

/// Shared handle to a storage backend with JSON (de)serialization.
///
/// `read`, `write` and `remove` never fail: faults are logged and the call
/// degrades (default value on read, dropped write). The `try_*` variants
/// return the underlying error for callers that want to report it.
///
/// Cloning is cheap; all clones address the same backend.
#[derive(Clone)]
pub struct KvStore {
    backend: Arc<dyn StorageBackend>,
}

impl KvStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Ephemeral store with no quota.
    pub fn memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// File-backed store rooted at `dir`. `quota` of `None` disables the limit.
    pub fn open_dir(dir: impl Into<PathBuf>, quota: Option<u64>) -> Result<Self, StorageError> {
        Ok(Self::new(FileBackend::open(dir)?.with_quota(quota)))
    }

    /// Read and deserialize `key`. A missing or blank document is `Ok(None)`.
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Json {
                key: key.to_string(),
                source,
            })
    }

    /// Read `key`, falling back to `default` when it is missing, corrupt or
    /// the medium faults.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                log::warn!("Error reading from storage ({key}): {e}");
                default
            }
        }
    }

    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Json {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, &json)
    }

    /// Serialize and store `value`. On failure the write is dropped and a
    /// warning logged; the caller is not informed.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match self.try_write(key, value) {
            Ok(()) => log::debug!("Persisted {key}"),
            Err(e) => log::warn!("Error writing to storage ({key}): {e}"),
        }
    }

    pub fn try_remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.try_remove(key) {
            log::warn!("Error removing from storage ({key}): {e}");
        }
    }

    /// Record the document layout version, returning what was stored before.
    ///
    /// A fresh store gets the current version written. A store written by a
    /// newer build is left untouched and a warning is logged; its documents
    /// are still read on a best-effort basis, and collection entries this
    /// build cannot parse are carried through writes unchanged.
    pub fn check_schema(&self) -> u32 {
        match self.read::<Option<SchemaMeta>>(keys::SCHEMA, None) {
            Some(meta) => {
                if meta.version > keys::SCHEMA_VERSION {
                    log::warn!(
                        "Storage was written by a newer version (schema {}, this build supports {}); \
                         reading what is compatible",
                        meta.version,
                        keys::SCHEMA_VERSION,
                    );
                }
                meta.version
            }
            None => {
                self.write(
                    keys::SCHEMA,
                    &SchemaMeta {
                        version: keys::SCHEMA_VERSION,
                    },
                );
                keys::SCHEMA_VERSION
            }
        }
    }
}

impl std::fmt::Debug for KvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStore").finish_non_exhaustive()
    }
}
