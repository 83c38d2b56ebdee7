//! Error type used by bounded wait operations.
//!
//! Only the `_ctx` and `_timeout` variants of the wait operations can fail,
//! and they fail in exactly one way: the bound fired before the awaited
//! completion. Unbounded waits cannot fail at all; they suspend until the
//! condition holds.

use thiserror::Error;

/// # Errors produced by bounded wait operations.
///
/// Raised only when a cancellation token fires or a timeout elapses before
/// the awaited handle(s) complete. It says nothing about the spawned work:
/// the work keeps running and its handle still completes eventually.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitError {
    /// The cancellation token fired (or the timeout elapsed) before completion.
    #[error("wait canceled before completion")]
    Canceled,
}

impl WaitError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskgate::WaitError;
    ///
    /// assert_eq!(WaitError::Canceled.as_label(), "wait_canceled");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            WaitError::Canceled => "wait_canceled",
        }
    }
}
