use std::future::Future;

use crate::media::{MediaDetails, MediaKey};

/// Source of display records for media keys.
///
/// The store and stats layers never talk to the network themselves; they
/// consult a provider when they need titles, posters or genres for a stored
/// key. Implementations should treat `key.kind` as a hint and fall back to
/// the other namespace when the id is unknown under the hinted kind.
///
/// The returned future must be `Send` so lookups can run on worker tasks.
pub trait CatalogProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve one key to its full details.
    fn media_details(
        &self,
        key: MediaKey,
    ) -> impl Future<Output = Result<MediaDetails, Self::Error>> + Send;
}
