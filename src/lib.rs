//! # taskgate
//!
//! **Taskgate** is a minimal completion-handle library for spawned async work.
//!
//! It provides a one-shot, multi-reader handle for a unit of work launched on
//! the tokio scheduler, plus combinators to wait for all or any of several
//! such handles, with optional cancellation and timeout bounds.
//!
//! ## Architecture
//! ```text
//!   spawn(fut) ─────────────► Task          (completion signal, no payload)
//!   spawn_with_result(fut) ─► TaskRes<R>    (completion signal + value slot)
//!         │                      │
//!         │ tokio::spawn         │ handle = Arc<gate + slot>, cheap Clone
//!         ▼                      ▼
//!   work runs to completion   any number of waiters:
//!   slot write (TaskRes)        is_done() / wait() / wait_ctx() / wait_timeout()
//!   gate fires exactly once     │
//!                               ▼
//!                  combinators compose handle futures:
//!                  wait_all / wait_any (+ _res, _ctx, _timeout variants)
//! ```
//!
//! ## Lifecycle
//! Every handle moves through exactly two states:
//! ```text
//! PENDING ──(work returns)──► COMPLETED   (terminal, irreversible)
//! ```
//! Wait operations are pure observers of this transition. Cancellation and
//! timeouts unblock the *waiter* only; the spawned work is never stopped,
//! keeps running, and still fires its handle eventually.
//!
//! ## Example
//! ```
//! use std::time::Duration;
//! use taskgate::{spawn_with_result, wait_all_res};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let a = spawn_with_result(async { 1 });
//! let b = spawn_with_result(async {
//!     tokio::time::sleep(Duration::from_millis(10)).await;
//!     2
//! });
//!
//! // Results come back in input order, not completion order.
//! assert_eq!(wait_all_res(&[a, b]).await, vec![1, 2]);
//! # }
//! ```
//!
//! ## What taskgate does NOT do
//! - It does not manage executors or thread pools (tokio does).
//! - It does not cancel running work; only waits are cancellable.
//! - It does not propagate panics: a panicking work future never fires its
//!   handle, and unbounded waiters on that handle suspend forever.

mod error;
mod handle;
mod wait;

pub use error::WaitError;
pub use handle::{spawn, spawn_with_result, Task, TaskRes};
pub use wait::{
    wait_all, wait_all_ctx, wait_all_res, wait_all_res_ctx, wait_all_res_timeout,
    wait_all_timeout, wait_any, wait_any_ctx, wait_any_res, wait_any_res_ctx,
    wait_any_res_timeout, wait_any_timeout,
};
