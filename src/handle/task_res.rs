//! # Result-carrying completion handle.
//!
//! [`TaskRes<R>`] is a one-shot, multi-reader handle for a spawned unit of
//! work that produces a value of type `R`. The handle is a cheap [`Clone`]
//! over shared state and may be handed to any number of independent waiters.
//!
//! ## Internals
//! ```text
//! spawn_with_result(fut)
//!        │
//!        ▼ tokio::spawn
//!   fut.await ──► slot.set(value) ──► gate.cancel()
//!                 (write-once)        (fires exactly once)
//!                                          │
//!                    waiters: gate.cancelled().await ──► slot.get().clone()
//! ```
//!
//! ## Rules
//! - The slot is written **strictly before** the gate fires, so every waiter
//!   that observes completion also observes the value (no data race).
//! - The gate never un-fires: once one waiter sees the handle complete, all
//!   subsequent observers do.
//! - Waiting is broadcast, not consuming: every waiter gets a clone of the
//!   same value, which is why the waiting operations require `R: Clone`.

use std::{
    fmt,
    future::Future,
    sync::{Arc, OnceLock},
    time::Duration,
};

use log::trace;
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::error::WaitError;

/// Shared completion state: a one-shot broadcast gate plus a write-once slot.
struct Gate<R> {
    /// Fired exactly once, when the spawned work has returned.
    done: CancellationToken,
    /// Written exactly once, strictly before `done` fires.
    slot: OnceLock<R>,
}

/// # Handle to the eventual result of one spawned unit of work.
///
/// Created by [`spawn_with_result`]; cannot be constructed directly. Cloning
/// yields another reference to the same underlying completion state. The
/// state is reclaimed once every clone (including the spawned worker's) has
/// been dropped; there is no explicit close operation.
///
/// ### Lifecycle
/// `PENDING → COMPLETED`, exactly once, irreversible. All methods are pure
/// observers of that transition; none can force, delay, or reverse it.
///
/// # Example
/// ```
/// use taskgate::spawn_with_result;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let t = spawn_with_result(async { 40 + 2 });
///
/// // wait() is repeatable; every call yields the same value.
/// assert_eq!(t.wait().await, 42);
/// assert_eq!(t.wait().await, 42);
/// assert!(t.is_done());
/// # }
/// ```
pub struct TaskRes<R> {
    gate: Arc<Gate<R>>,
}

impl<R> Clone for TaskRes<R> {
    fn clone(&self) -> Self {
        Self {
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<R> fmt::Debug for TaskRes<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskRes")
            .field("done", &self.is_done())
            .finish()
    }
}

impl<R> TaskRes<R> {
    /// Creates a handle in the pending state.
    fn pending() -> Self {
        Self {
            gate: Arc::new(Gate {
                done: CancellationToken::new(),
                slot: OnceLock::new(),
            }),
        }
    }

    /// Stores the result and fires the gate.
    ///
    /// The slot write happens-before the gate fire, so any waiter woken by
    /// the gate is guaranteed to see the value.
    fn complete(&self, value: R) {
        let _ = self.gate.slot.set(value);
        self.gate.done.cancel();
        trace!("task completed, gate fired");
    }

    /// Returns `true` iff the spawned work has completed.
    ///
    /// Non-suspending and infallible. Once this returns `true` it returns
    /// `true` forever.
    pub fn is_done(&self) -> bool {
        self.gate.done.is_cancelled()
    }
}

impl<R: Clone> TaskRes<R> {
    /// Suspends until the work completes, then returns its result.
    ///
    /// Returns immediately if already complete. Safe to call concurrently
    /// from many waiters and repeatedly from the same waiter; every call
    /// yields a clone of the same value.
    pub async fn wait(&self) -> R {
        self.gate.done.cancelled().await;
        self.value()
    }

    /// Suspends until the work completes or `ctx` fires, whichever is first.
    ///
    /// On cancellation returns [`WaitError::Canceled`]. The handle itself is
    /// unaffected: the work keeps running and a later [`wait`](Self::wait)
    /// still succeeds. An already-fired token fails without suspending.
    ///
    /// # Example
    /// ```
    /// use taskgate::{spawn_with_result, WaitError};
    /// use tokio_util::sync::CancellationToken;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let t = spawn_with_result(async { std::future::pending::<u32>().await });
    ///
    /// let ctx = CancellationToken::new();
    /// ctx.cancel();
    /// assert_eq!(t.wait_ctx(&ctx).await, Err(WaitError::Canceled));
    /// # }
    /// ```
    pub async fn wait_ctx(&self, ctx: &CancellationToken) -> Result<R, WaitError> {
        tokio::select! {
            _ = self.gate.done.cancelled() => Ok(self.value()),
            _ = ctx.cancelled() => Err(WaitError::Canceled),
        }
    }

    /// Suspends until the work completes or `timeout` elapses.
    ///
    /// On timeout returns [`WaitError::Canceled`]; same non-effect on the
    /// handle as [`wait_ctx`](Self::wait_ctx).
    pub async fn wait_timeout(&self, timeout: Duration) -> Result<R, WaitError> {
        time::timeout(timeout, self.wait())
            .await
            .map_err(|_elapsed| WaitError::Canceled)
    }

    /// Non-suspending peek at the result.
    ///
    /// Returns `Some(value)` iff the work has completed, `None` while it is
    /// still pending.
    pub fn try_result(&self) -> Option<R> {
        if self.is_done() {
            Some(self.value())
        } else {
            None
        }
    }

    /// Reads the slot after the gate has fired.
    fn value(&self) -> R {
        self.gate
            .slot
            .get()
            .cloned()
            .expect("result slot is written before the gate fires")
    }
}

/// Launches `work` on the tokio scheduler and returns a [`TaskRes`] for its
/// eventual result.
///
/// Returns immediately; the handle starts out pending and completes strictly
/// after `work` returns, however long that takes. If `work` panics the handle
/// never completes and unbounded waiters on it suspend forever (panics are
/// left to tokio's default fault behavior).
///
/// # Example
/// ```
/// use std::time::Duration;
/// use taskgate::spawn_with_result;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let t = spawn_with_result(async {
///     tokio::time::sleep(Duration::from_millis(5)).await;
///     "done"
/// });
/// assert_eq!(t.wait().await, "done");
/// # }
/// ```
pub fn spawn_with_result<R, F>(work: F) -> TaskRes<R>
where
    R: Send + Sync + 'static,
    F: Future<Output = R> + Send + 'static,
{
    let handle = TaskRes::pending();
    let gate = handle.clone();

    tokio::spawn(async move {
        let value = work.await;
        gate.complete(value);
    });
    trace!("spawned result-carrying task");

    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_wait_is_repeatable_and_broadcast() {
        let t = spawn_with_result(async {
            time::sleep(Duration::from_millis(50)).await;
            7
        });
        let t2 = t.clone();

        assert_eq!(t.wait().await, 7);
        assert_eq!(t.wait().await, 7);
        assert_eq!(t2.wait().await, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_done_is_monotonic() {
        let t = spawn_with_result(async {
            time::sleep(Duration::from_millis(100)).await;
            1
        });

        time::sleep(Duration::from_millis(10)).await;
        assert!(!t.is_done());

        t.wait().await;
        for _ in 0..3 {
            assert!(t.is_done());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_timeout_short_then_long() {
        let t = spawn_with_result(async {
            time::sleep(Duration::from_millis(100)).await;
            "v"
        });

        assert_eq!(
            t.wait_timeout(Duration::from_millis(50)).await,
            Err(WaitError::Canceled)
        );
        // The handle is unaffected by the failed wait.
        assert_eq!(t.wait_timeout(Duration::from_millis(500)).await, Ok("v"));
        assert_eq!(t.wait().await, "v");
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_ctx_cancelled_midway() {
        let t = spawn_with_result(async {
            time::sleep(Duration::from_millis(100)).await;
            9
        });

        let ctx = CancellationToken::new();
        let canceller = ctx.clone();
        tokio::spawn(async move {
            time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        assert_eq!(t.wait_ctx(&ctx).await, Err(WaitError::Canceled));
        // Work was not cancelled, only the wait.
        assert_eq!(t.wait().await, 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_ctx_already_cancelled_fails_fast() {
        let t = spawn_with_result(async { std::future::pending::<u32>().await });

        let ctx = CancellationToken::new();
        ctx.cancel();
        assert_eq!(t.wait_ctx(&ctx).await, Err(WaitError::Canceled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_result_peek() {
        let t = spawn_with_result(async {
            time::sleep(Duration::from_millis(50)).await;
            3
        });

        assert_eq!(t.try_result(), None);
        t.wait().await;
        assert_eq!(t.try_result(), Some(3));
        assert_eq!(t.try_result(), Some(3));
    }
}
