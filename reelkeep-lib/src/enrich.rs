//! Resolving stored keys into full details through a [`CatalogProvider`].
//!
//! Lookups run on a [`WorkerPool`] with a per-request timeout. A key that
//! fails or times out is reported in [`EnrichmentReport::unenriched`] and
//! never holds up the others. There are no retries.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reelkeep_core::{CatalogProvider, MediaDetails, MediaKey};

use crate::worker_pool::WorkerPool;

pub const DEFAULT_CONCURRENCY: usize = 20;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichOptions {
    /// Maximum lookups in flight at once.
    pub concurrency: usize,
    /// Limit on a single lookup, fallback attempts included.
    pub request_timeout: Duration,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Details resolved for a requested key.
///
/// `key` is the key that was asked for, which is what the user's collections
/// hold. `details.key()` may differ in kind when the provider found the id
/// under the other namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedItem {
    pub key: MediaKey,
    pub details: MediaDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnenrichReason {
    TimedOut,
    Failed(String),
}

impl fmt::Display for UnenrichReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnenrichReason::TimedOut => f.write_str("timed out"),
            UnenrichReason::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

/// A key whose details could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unenriched {
    pub key: MediaKey,
    pub reason: UnenrichReason,
}

/// Outcome of an enrichment batch. Both lists follow input order.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentReport {
    pub items: Vec<EnrichedItem>,
    pub unenriched: Vec<Unenriched>,
}

impl EnrichmentReport {
    pub fn is_complete(&self) -> bool {
        self.unenriched.is_empty()
    }
}

/// Resolve `keys` through `provider`. Duplicate keys are looked up once.
///
/// Dropping the returned future cancels every lookup still in flight.
pub async fn enrich<P>(
    provider: Arc<P>,
    keys: Vec<MediaKey>,
    options: &EnrichOptions,
) -> EnrichmentReport
where
    P: CatalogProvider + 'static,
{
    let mut seen = HashSet::new();
    let keys: Vec<MediaKey> = keys.into_iter().filter(|k| seen.insert(*k)).collect();
    if keys.is_empty() {
        return EnrichmentReport::default();
    }

    log::debug!(
        "Enriching {} keys ({} workers, {}ms timeout)",
        keys.len(),
        options.concurrency,
        options.request_timeout.as_millis()
    );

    let request_timeout = options.request_timeout;
    let work: Vec<(usize, MediaKey)> = keys.iter().copied().enumerate().collect();
    let mut pool = WorkerPool::start(options.concurrency, work, move |(index, key)| {
        let provider = provider.clone();
        async move {
            let outcome =
                match tokio::time::timeout(request_timeout, provider.media_details(key)).await {
                    Ok(Ok(details)) => Ok(details),
                    Ok(Err(e)) => Err(UnenrichReason::Failed(e.to_string())),
                    Err(_) => Err(UnenrichReason::TimedOut),
                };
            (index, outcome)
        }
    });

    let mut slots: Vec<Option<Result<MediaDetails, UnenrichReason>>> = vec![None; keys.len()];
    while let Some((index, outcome)) = pool.recv().await {
        slots[index] = Some(outcome);
    }

    let mut report = EnrichmentReport::default();
    for (key, slot) in keys.into_iter().zip(slots) {
        // No result at all means the pool's safety timeout dropped the item.
        match slot.unwrap_or(Err(UnenrichReason::TimedOut)) {
            Ok(details) => report.items.push(EnrichedItem { key, details }),
            Err(reason) => {
                log::warn!("Could not load details for {}: {}", key, reason);
                report.unenriched.push(Unenriched { key, reason });
            }
        }
    }

    log::debug!(
        "Enrichment finished: {} resolved, {} unresolved",
        report.items.len(),
        report.unenriched.len()
    );
    report
}

#[cfg(test)]
#[path = "tests/enrich_tests.rs"]
mod tests;
