//! Local persistence for a user's favorites, watchlist, ratings and reviews.
//!
//! Layers, leaf first:
//! - [`backend`]: the storage medium (a directory of JSON files, or memory)
//! - [`kv`]: fail-soft JSON get/set/remove over a backend
//! - [`item_set`] / [`keyed`]: the four user collections
//!
//! Storage faults never escape the collection APIs. They are logged and the
//! in-memory state stays authoritative for the rest of the session.

pub mod backend;
pub mod error;
pub mod item_set;
pub mod keyed;
pub mod keys;
pub mod kv;

pub use backend::{DEFAULT_QUOTA_BYTES, FileBackend, MemoryBackend, StorageBackend};
pub use error::StorageError;
pub use item_set::{ItemSet, Toggle};
pub use keyed::{KeyedMap, RatingMap, Ratings, ReviewMap, Reviews};
pub use kv::KvStore;
