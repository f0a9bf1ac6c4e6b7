//! Storage media: raw string documents addressed by key.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;

/// Conventional per-origin capacity of browser key-value storage (5 MiB).
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

const DOCUMENT_EXT: &str = "json";

/// A durable key-value medium holding one UTF-8 document per key.
///
/// Removing an absent key is not an error.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

fn check_quota(quota: Option<u64>, others: u64, incoming: u64) -> Result<(), StorageError> {
    match quota {
        Some(limit) if others + incoming > limit => Err(StorageError::QuotaExceeded {
            needed: others + incoming,
            limit,
        }),
        _ => Ok(()),
    }
}

/// One `<key>.json` file per key inside a directory.
///
/// Writes go to `<key>.json.tmp` first and are renamed into place, so a crash
/// mid-write never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
    quota: Option<u64>,
}

impl FileBackend {
    /// Open (creating if needed) a storage directory with the default quota.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::io(dir.display(), e))?;
        Ok(Self {
            dir,
            quota: Some(DEFAULT_QUOTA_BYTES),
        })
    }

    /// Replace the byte quota. `None` disables the limit.
    pub fn with_quota(mut self, quota: Option<u64>) -> Self {
        self.quota = quota;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{DOCUMENT_EXT}"))
    }

    /// Total size of all stored documents except `exclude`.
    fn usage_excluding(&self, exclude: &Path) -> Result<u64, StorageError> {
        let entries =
            fs::read_dir(&self.dir).map_err(|e| StorageError::io(self.dir.display(), e))?;
        let mut total = 0;
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path == exclude || path.extension().is_none_or(|ext| ext != DOCUMENT_EXT) {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                total += meta.len();
            }
        }
        Ok(total)
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path.display(), e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.path_for(key);
        if self.quota.is_some() {
            let others = self.usage_excluding(&path)?;
            check_quota(self.quota, others, value.len() as u64)?;
        }

        let tmp = path.with_extension(format!("{DOCUMENT_EXT}.tmp"));
        fs::write(&tmp, value).map_err(|e| StorageError::io(tmp.display(), e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::io(path.display(), e))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(path.display(), e)),
        }
    }
}

/// In-process storage. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<u64>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(mut self, quota: Option<u64>) -> Self {
        self.quota = quota;
        self
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::unavailable("memory backend lock poisoned"))
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut entries = self.lock()?;
        let others: u64 = entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len() as u64)
            .sum();
        check_quota(self.quota, others, value.len() as u64)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn rejects_path_like_keys() {
        let backend = MemoryBackend::new();
        assert!(matches!(
            backend.set("../escape", "{}"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(backend.get(""), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn file_backend_set_get_remove() {
        let tmp = TempDir::new().unwrap();
        let backend = FileBackend::open(tmp.path().join("data")).unwrap();

        assert_eq!(backend.get("movie_favorites").unwrap(), None);
        backend.set("movie_favorites", "[]").unwrap();
        assert_eq!(backend.get("movie_favorites").unwrap().as_deref(), Some("[]"));
        assert!(tmp.path().join("data/movie_favorites.json").exists());
        assert!(!tmp.path().join("data/movie_favorites.json.tmp").exists());

        backend.remove("movie_favorites").unwrap();
        assert_eq!(backend.get("movie_favorites").unwrap(), None);
        // Removing again is fine
        backend.remove("movie_favorites").unwrap();
    }

    #[test]
    fn file_backend_quota_counts_other_documents() {
        let tmp = TempDir::new().unwrap();
        let backend = FileBackend::open(tmp.path()).unwrap().with_quota(Some(10));

        backend.set("a", "123456").unwrap();
        // Overwriting the same key only counts the new size
        backend.set("a", "1234567890").unwrap();
        let err = backend.set("b", "x").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { needed: 11, limit: 10 }));
        assert_eq!(backend.get("b").unwrap(), None);
    }

    #[test]
    fn memory_backend_quota() {
        let backend = MemoryBackend::new().with_quota(Some(4));
        backend.set("k", "1234").unwrap();
        assert!(matches!(
            backend.set("k", "12345"),
            Err(StorageError::QuotaExceeded { .. })
        ));
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("1234"));
    }
}
