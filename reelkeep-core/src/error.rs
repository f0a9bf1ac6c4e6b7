use thiserror::Error;

/// Errors raised when a caller hands the library a value it must reject.
///
/// These indicate a problem with the caller's input rather than with the
/// environment, so they are always returned instead of being logged away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Star ratings must lie in `1..=5`.
    #[error("rating {0} is out of range (expected 1-5)")]
    RatingOutOfRange(i64),
}

/// Error returned when a string cannot be parsed into a `MediaKind`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown media kind: '{0}' (expected movie or series)")]
pub struct MediaKindParseError(pub String);

/// Error returned when a string cannot be parsed into a `MediaKey`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaKeyParseError {
    #[error(transparent)]
    Kind(#[from] MediaKindParseError),

    #[error("invalid media id in key '{0}'")]
    Id(String),
}
