//! Futures that run on a worker thread while the caller keeps going.
//!
//! Each job owns a private current-thread tokio runtime, so callers do not
//! need a runtime of their own. The caller checks for the result with
//! [`AsyncJob::poll`], which never blocks.

use anyhow::{anyhow, Result};
use std::future::Future;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tokio::runtime::Builder;

/// Handle to a result that is still being computed elsewhere
pub struct AsyncJob<T> {
    pending: Option<Receiver<Result<T>>>,
}

impl<T> AsyncJob<T> {
    pub fn new(receiver: Receiver<Result<T>>) -> Self {
        Self {
            pending: Some(receiver),
        }
    }

    /// Take the result if it has arrived. Yields it once; later calls return `None`.
    pub fn poll(&mut self) -> Option<Result<T>> {
        let received = match self.pending.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(anyhow!("background job disconnected")),
        };
        self.pending = None;
        Some(received)
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }
}

/// Start `make_future` on a fresh thread and return a handle to its result
pub fn spawn_job<T, F, Fut>(make_future: F) -> AsyncJob<T>
where
    T: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T>> + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| anyhow!("could not start job runtime: {}", e))
            .and_then(|runtime| runtime.block_on(make_future()));
        if tx.send(result).is_err() {
            tracing::debug!("Background job finished after its handle was dropped");
        }
    });
    AsyncJob::new(rx)
}
