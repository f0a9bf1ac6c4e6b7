//! Bounded pool of tokio workers.
//!
//! N persistent tasks pull work items from a bounded `async-channel` and push
//! results onto an unbounded mpsc. The `async-channel` receiver is `Clone`, so
//! each worker owns a handle and no worker can hold a lock while idle.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Last-resort limit per work item. Sits well above the enrichment request
/// timeout so it only fires if that layer fails to.
const SAFETY_TIMEOUT: Duration = Duration::from_secs(120);

/// A pool of worker tasks that process items concurrently.
///
/// At most `n` items are in flight at once. Dropping the pool aborts the
/// feeder and every worker, cancelling any lookups still running.
///
/// ```ignore
/// let mut pool = WorkerPool::start(4, keys, |key| async move {
///     provider.media_details(key).await
/// });
///
/// while let Some(result) = pool.recv().await {
///     handle(result);
/// }
/// ```
pub struct WorkerPool<R: Send + 'static> {
    result_rx: mpsc::UnboundedReceiver<R>,
    handles: Vec<JoinHandle<()>>,
}

impl<R: Send + 'static> WorkerPool<R> {
    /// Spawn `n` workers (at least one), feed them `items`, and return the
    /// pool for receiving results.
    ///
    /// An item that exceeds the safety timeout produces no result; the
    /// worker moves on to the next one.
    pub fn start<W, F, Fut>(n: usize, items: Vec<W>, process_fn: F) -> Self
    where
        W: Send + 'static,
        F: Fn(W) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let n = n.max(1);
        let (work_tx, work_rx) = async_channel::bounded::<W>(n);
        let (result_tx, result_rx) = mpsc::unbounded_channel::<R>();
        let process_fn = Arc::new(process_fn);

        let mut handles: Vec<JoinHandle<()>> = (0..n)
            .map(|_| {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                let process_fn = process_fn.clone();
                tokio::spawn(async move {
                    while let Ok(item) = work_rx.recv().await {
                        match tokio::time::timeout(SAFETY_TIMEOUT, process_fn(item)).await {
                            Ok(r) => {
                                if result_tx.send(r).is_err() {
                                    break;
                                }
                            }
                            Err(_) => {
                                log::debug!(
                                    "Worker pool: item timed out after {}s, skipping",
                                    SAFETY_TIMEOUT.as_secs()
                                );
                            }
                        }
                    }
                })
            })
            .collect();

        // Result channel closes once every worker has exited.
        drop(result_tx);

        handles.push(tokio::spawn(async move {
            for item in items {
                if work_tx.send(item).await.is_err() {
                    break;
                }
            }
        }));

        Self { result_rx, handles }
    }

    /// Next result, or `None` once every item is done and the workers have
    /// shut down.
    pub async fn recv(&mut self) -> Option<R> {
        self.result_rx.recv().await
    }
}

impl<R: Send + 'static> Drop for WorkerPool<R> {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn processes_every_item() {
        let mut pool = WorkerPool::start(3, (1..=10).collect(), |n: u32| async move { n * 2 });
        let mut results = Vec::new();
        while let Some(r) = pool.recv().await {
            results.push(r);
        }
        results.sort();
        assert_eq!(results, (1..=10).map(|n| n * 2).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn zero_workers_still_makes_progress() {
        let mut pool = WorkerPool::start(0, vec![1, 2], |n: u32| async move { n });
        let mut count = 0;
        while pool.recv().await.is_some() {
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn drop_cancels_in_flight_work() {
        let finished = Arc::new(AtomicUsize::new(0));
        let counter = finished.clone();
        let pool = WorkerPool::start(2, vec![1, 2, 3], move |_: u32| {
            let counter = counter.clone();
            async move {
                tokio::time::sleep(Duration::from_secs(30)).await;
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        tokio::task::yield_now().await;
        drop(pool);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(finished.load(Ordering::SeqCst), 0);
    }
}
