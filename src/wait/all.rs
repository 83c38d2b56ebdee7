//! # Wait-all: suspend until every handle in the set has completed.
//!
//! The aggregate guarantee is "returns after the last-completing handle";
//! internal ordering is unspecified. The result-carrying variants return
//! values positionally aligned with the input slice, regardless of the order
//! in which the handles actually complete.
//!
//! ## Rules
//! - An empty set is vacuously complete: returns immediately (`vec![]` for
//!   the result family).
//! - Bounded variants deliver nothing partial on cancellation; the caller
//!   learns nothing about which subset had completed. Individual handles
//!   remain queryable via `is_done()` / `wait()` afterward.

use std::time::Duration;

use futures::future;
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::error::WaitError;
use crate::handle::{Task, TaskRes};

/// Suspends until every handle in `tasks` has completed.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use taskgate::{spawn, wait_all};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fast = spawn(async {});
/// let slow = spawn(async { tokio::time::sleep(Duration::from_millis(10)).await });
///
/// wait_all(&[fast.clone(), slow.clone()]).await;
/// assert!(fast.is_done() && slow.is_done());
/// # }
/// ```
pub async fn wait_all(tasks: &[Task]) {
    future::join_all(tasks.iter().map(Task::wait)).await;
}

/// Like [`wait_all`], but gives up when `ctx` fires first.
pub async fn wait_all_ctx(ctx: &CancellationToken, tasks: &[Task]) -> Result<(), WaitError> {
    tokio::select! {
        _ = wait_all(tasks) => Ok(()),
        _ = ctx.cancelled() => Err(WaitError::Canceled),
    }
}

/// Like [`wait_all`], but gives up when `timeout` elapses first.
pub async fn wait_all_timeout(timeout: Duration, tasks: &[Task]) -> Result<(), WaitError> {
    time::timeout(timeout, wait_all(tasks))
        .await
        .map_err(|_elapsed| WaitError::Canceled)
}

/// Suspends until every handle completed; returns results in input order.
///
/// `tasks[i]`'s result lands at output position `i` no matter when it
/// completed relative to the others.
pub async fn wait_all_res<R: Clone>(tasks: &[TaskRes<R>]) -> Vec<R> {
    future::join_all(tasks.iter().map(TaskRes::wait)).await
}

/// Like [`wait_all_res`], but gives up when `ctx` fires first.
pub async fn wait_all_res_ctx<R: Clone>(
    ctx: &CancellationToken,
    tasks: &[TaskRes<R>],
) -> Result<Vec<R>, WaitError> {
    tokio::select! {
        res = wait_all_res(tasks) => Ok(res),
        _ = ctx.cancelled() => Err(WaitError::Canceled),
    }
}

/// Like [`wait_all_res`], but gives up when `timeout` elapses first.
pub async fn wait_all_res_timeout<R: Clone>(
    timeout: Duration,
    tasks: &[TaskRes<R>],
) -> Result<Vec<R>, WaitError> {
    time::timeout(timeout, wait_all_res(tasks))
        .await
        .map_err(|_elapsed| WaitError::Canceled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::{spawn, spawn_with_result};
    use pretty_assertions::assert_eq;

    /// Three results completing after 50/100/150 ms, returning 1/2/3.
    fn staggered() -> Vec<TaskRes<u32>> {
        [(50u64, 1u32), (100, 2), (150, 3)]
            .into_iter()
            .map(|(ms, v)| {
                spawn_with_result(async move {
                    time::sleep(Duration::from_millis(ms)).await;
                    v
                })
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_all_returns_after_slowest() {
        let tasks: Vec<Task> = [50u64, 100, 150]
            .into_iter()
            .map(|ms| spawn(async move { time::sleep(Duration::from_millis(ms)).await }))
            .collect();

        let start = time::Instant::now();
        wait_all(&tasks).await;
        let elapsed = start.elapsed();

        assert!(
            elapsed >= Duration::from_millis(150) && elapsed <= Duration::from_millis(170),
            "expected ~150ms, got {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_all_res_input_order() {
        let tasks = staggered();

        let start = time::Instant::now();
        let res = wait_all_res(&tasks).await;
        let elapsed = start.elapsed();

        assert_eq!(res, vec![1, 2, 3]);
        assert!(
            elapsed >= Duration::from_millis(150) && elapsed <= Duration::from_millis(170),
            "expected ~150ms, got {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_all_res_timeout_short_fails_long_succeeds() {
        let tasks = staggered();
        let start = time::Instant::now();

        // 75ms bound: the 100ms and 150ms tasks have not finished yet.
        let res = wait_all_res_timeout(Duration::from_millis(75), &tasks).await;
        assert_eq!(res, Err(WaitError::Canceled));

        // Generous bound: completes once the slowest handle fires.
        let res = wait_all_res_timeout(Duration::from_millis(500), &tasks).await;
        assert_eq!(res, Ok(vec![1, 2, 3]));

        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_millis(150) && elapsed <= Duration::from_millis(170),
            "expected ~150ms total, got {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_all_ctx_cancellation_delivers_nothing_partial() {
        let tasks = staggered();

        let ctx = CancellationToken::new();
        let canceller = ctx.clone();
        tokio::spawn(async move {
            time::sleep(Duration::from_millis(75)).await;
            canceller.cancel();
        });

        assert_eq!(
            wait_all_res_ctx(&ctx, &tasks).await,
            Err(WaitError::Canceled)
        );

        // Handles stay independently queryable after the failed wait.
        assert!(tasks[0].is_done());
        assert!(!tasks[2].is_done());
        assert_eq!(tasks[2].wait().await, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_all_empty_set_is_immediate() {
        wait_all(&[]).await;
        assert_eq!(wait_all_res::<u32>(&[]).await, Vec::<u32>::new());
        assert_eq!(
            wait_all_timeout(Duration::from_millis(1), &[]).await,
            Ok(())
        );
    }
}
