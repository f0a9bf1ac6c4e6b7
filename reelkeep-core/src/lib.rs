//! Core domain types shared by every reelkeep crate.
//!
//! Defines media identity (`MediaKind`, `MediaKey`), the display records
//! surfaced by a catalog provider, the validated `Rating` type, and the
//! `CatalogProvider` trait that the enrichment layer consults.

pub mod error;
pub mod media;
pub mod provider;
pub mod rating;

pub use error::{MediaKeyParseError, MediaKindParseError, ValidationError};
pub use media::{Genre, MediaDetails, MediaItem, MediaKey, MediaKind};
pub use provider::CatalogProvider;
pub use rating::Rating;
