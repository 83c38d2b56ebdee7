//! # Value-less completion handle.
//!
//! [`Task`] is the fire-and-forget sibling of [`TaskRes`]: the same one-shot,
//! multi-reader completion signal, without a result. It is a thin newtype
//! over `TaskRes<()>` so both families share one gate implementation.

use std::{fmt, future::Future, time::Duration};

use tokio_util::sync::CancellationToken;

use crate::error::WaitError;
use crate::handle::task_res::{spawn_with_result, TaskRes};

/// # Handle to the eventual completion of one spawned unit of work.
///
/// Created by [`spawn`]; cheap to [`Clone`] and share with any number of
/// independent waiters. See [`TaskRes`] for the full lifecycle contract;
/// `Task` is identical minus the payload.
///
/// # Example
/// ```
/// use taskgate::spawn;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let t = spawn(async { /* work */ });
/// t.wait().await;
/// assert!(t.is_done());
/// # }
/// ```
#[derive(Clone)]
pub struct Task {
    inner: TaskRes<()>,
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").field("done", &self.is_done()).finish()
    }
}

impl Task {
    /// Returns `true` iff the spawned work has completed.
    ///
    /// Non-suspending and infallible; monotonic (never reverts to `false`).
    pub fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    /// Suspends until the work completes.
    ///
    /// Returns immediately if already complete; idempotent and safe from any
    /// number of concurrent waiters.
    pub async fn wait(&self) {
        self.inner.wait().await
    }

    /// Suspends until the work completes or `ctx` fires, whichever is first.
    ///
    /// On cancellation returns [`WaitError::Canceled`]; the work keeps
    /// running and a later [`wait`](Self::wait) still succeeds.
    pub async fn wait_ctx(&self, ctx: &CancellationToken) -> Result<(), WaitError> {
        self.inner.wait_ctx(ctx).await
    }

    /// Suspends until the work completes or `timeout` elapses.
    pub async fn wait_timeout(&self, timeout: Duration) -> Result<(), WaitError> {
        self.inner.wait_timeout(timeout).await
    }
}

/// Launches `work` on the tokio scheduler and returns a [`Task`] that
/// completes strictly after `work` returns.
///
/// Returns immediately without waiting. Panicking work never completes its
/// handle; see [`spawn_with_result`] for details.
pub fn spawn<F>(work: F) -> Task
where
    F: Future<Output = ()> + Send + 'static,
{
    Task {
        inner: spawn_with_result(work),
    }
}
