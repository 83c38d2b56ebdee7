//! # Wait-any: suspend until the first handle in the set completes.
//!
//! Returns as soon as one handle signals, by completion time rather than
//! input order. The value-less family exposes no indication of *which*
//! handle finished; the result family returns that handle's value.
//!
//! ## Rules
//! - Tie-break among handles that are ready simultaneously is
//!   first-observed-wins, not deterministic.
//! - An empty set can never complete: the unbounded variants suspend
//!   forever, the bounded ones always return `Canceled`.

use std::time::Duration;

use futures::future;
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::error::WaitError;
use crate::handle::{Task, TaskRes};

/// Suspends until at least one handle in `tasks` has completed.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use taskgate::{spawn, wait_any};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fast = spawn(async {});
/// let slow = spawn(async { tokio::time::sleep(Duration::from_secs(3600)).await });
///
/// // Returns once `fast` signals; `slow` keeps running.
/// wait_any(&[fast, slow]).await;
/// # }
/// ```
pub async fn wait_any(tasks: &[Task]) {
    if tasks.is_empty() {
        return future::pending().await;
    }
    let waits: Vec<_> = tasks.iter().map(|t| Box::pin(t.wait())).collect();
    future::select_all(waits).await;
}

/// Like [`wait_any`], but gives up when `ctx` fires first.
pub async fn wait_any_ctx(ctx: &CancellationToken, tasks: &[Task]) -> Result<(), WaitError> {
    tokio::select! {
        _ = wait_any(tasks) => Ok(()),
        _ = ctx.cancelled() => Err(WaitError::Canceled),
    }
}

/// Like [`wait_any`], but gives up when `timeout` elapses first.
pub async fn wait_any_timeout(timeout: Duration, tasks: &[Task]) -> Result<(), WaitError> {
    time::timeout(timeout, wait_any(tasks))
        .await
        .map_err(|_elapsed| WaitError::Canceled)
}

/// Suspends until the first handle completes and returns its value.
pub async fn wait_any_res<R: Clone>(tasks: &[TaskRes<R>]) -> R {
    if tasks.is_empty() {
        return future::pending().await;
    }
    let waits: Vec<_> = tasks.iter().map(|t| Box::pin(t.wait())).collect();
    let (value, _index, _rest) = future::select_all(waits).await;
    value
}

/// Like [`wait_any_res`], but gives up when `ctx` fires first.
pub async fn wait_any_res_ctx<R: Clone>(
    ctx: &CancellationToken,
    tasks: &[TaskRes<R>],
) -> Result<R, WaitError> {
    tokio::select! {
        value = wait_any_res(tasks) => Ok(value),
        _ = ctx.cancelled() => Err(WaitError::Canceled),
    }
}

/// Like [`wait_any_res`], but gives up when `timeout` elapses first.
pub async fn wait_any_res_timeout<R: Clone>(
    timeout: Duration,
    tasks: &[TaskRes<R>],
) -> Result<R, WaitError> {
    time::timeout(timeout, wait_any_res(tasks))
        .await
        .map_err(|_elapsed| WaitError::Canceled)
}
