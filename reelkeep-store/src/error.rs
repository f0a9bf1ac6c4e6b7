use thiserror::Error;

/// Faults raised by the storage medium or while (de)serializing documents.
///
/// The collection stores swallow these after logging; they surface only
/// through the `try_*` methods on [`KvStore`](crate::KvStore).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Storage quota exceeded: {needed} bytes needed, limit is {limit}")]
    QuotaExceeded { needed: u64, limit: u64 },

    #[error("Invalid storage key '{0}' (allowed: letters, digits, '_' and '-')")]
    InvalidKey(String),

    #[error("Corrupt JSON under key '{key}': {source}")]
    Json {
        key: String,
        source: serde_json::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn io(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
