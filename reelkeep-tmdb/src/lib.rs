pub mod client;
pub mod config;
pub mod error;
pub mod images;
pub mod listing;
pub mod types;

pub use client::TmdbClient;
pub use config::{API_KEY_ENV, ApiKeySource, TmdbConfig, resolve_api_key};
pub use error::TmdbError;
pub use images::{ImageKind, ImageSize, image_url};
pub use listing::ListCategory;
pub use types::{CastMember, Page, Video, find_trailer};
