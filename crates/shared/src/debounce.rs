use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Coalesces bursts of submitted values into a single `apply` call.
///
/// Each submission restarts the quiet window; once no new value arrives for
/// a full window, `apply` runs exactly once with the latest value. An apply
/// in progress is never interrupted: values submitted while it runs are
/// picked up afterwards and debounced again. Dropping the debouncer stops
/// the worker, so an abandoned owner leaves no pending recompute behind.
///
/// Must be created inside a tokio runtime.
pub struct Debouncer<T> {
    tx: watch::Sender<T>,
    worker: JoinHandle<()>,
}

impl<T: Clone + Send + Sync + 'static> Debouncer<T> {
    pub fn spawn<F, Fut>(initial: T, window: Duration, mut apply: F) -> Self
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let (tx, mut rx) = watch::channel(initial);
        let worker = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                // Keep restarting the window until the input settles.
                loop {
                    tokio::select! {
                        changed = rx.changed() => {
                            if changed.is_err() {
                                return;
                            }
                        }
                        _ = tokio::time::sleep(window) => break,
                    }
                }
                let value = rx.borrow_and_update().clone();
                apply(value).await;
            }
        });

        Self { tx, worker }
    }

    /// Submit the latest combined state; restarts the quiet window.
    pub fn submit(&self, value: T) {
        let _ = self.tx.send(value);
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
