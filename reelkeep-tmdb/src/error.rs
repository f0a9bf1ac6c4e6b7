/// Errors that can occur while talking to the TMDB API.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found in TMDB: {path}")]
    NotFound { path: String },

    #[error("TMDB rejected the API key")]
    InvalidApiKey,

    #[error("Rate limited by TMDB API")]
    RateLimit,

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TmdbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TmdbError::NotFound { .. })
    }
}
