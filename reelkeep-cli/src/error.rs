use thiserror::Error;

use reelkeep_core::ValidationError;
use reelkeep_lib::ConfigError;
use reelkeep_store::StorageError;
use reelkeep_tmdb::TmdbError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("TMDB error: {0}")]
    Tmdb(#[from] TmdbError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
