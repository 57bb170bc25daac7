//! Cancellable one-shot timers
//!
//! Thin wrapper over a spawned task so callers can schedule a callback and
//! later cancel it without leaking a pending run.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Handle to a scheduled one-shot callback
///
/// Dropping the handle does NOT cancel the run; call [`cancel`] to do
/// that. Cancelling a handle whose callback already ran is a no-op.
///
/// [`cancel`]: TimerHandle::cancel
#[derive(Debug)]
pub struct TimerHandle {
    handle: JoinHandle<()>,
}

impl TimerHandle {
    /// Schedule `callback` to run once `duration` from now
    ///
    /// The deadline is anchored at this call, not at the task's first poll.
    pub fn schedule<F>(duration: Duration, callback: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let deadline = Instant::now() + duration;
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            callback.await;
        });

        Self { handle }
    }

    /// Cancel the scheduled run
    ///
    /// Safe to call from inside the callback itself; a poll already in
    /// progress runs to its next suspension point.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Check whether the callback has run (or been cancelled)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
