//! # Wait combinators over sets of handles.
//!
//! Pure compositions over the handle contract; the combinators hold no locks
//! and add no shared state of their own.
//!
//! - [`wait_all`] family: suspend until every handle in the set completed
//! - [`wait_any`] family: suspend until the first handle completed
//!
//! Each family comes in six shapes: value-less and result-carrying, each
//! unbounded, cancellation-token-bounded (`_ctx`), and duration-bounded
//! (`_timeout`). The bounded shapes race the aggregate wait against the bound
//! with [`tokio::select!`] / [`tokio::time::timeout`]; no helper task is
//! spawned, so a wait abandoned at its bound leaks nothing. The underlying
//! work is never affected either way and the handles stay independently
//! usable after a bounded wait fails.

mod all;
mod any;

pub use all::{
    wait_all, wait_all_ctx, wait_all_res, wait_all_res_ctx, wait_all_res_timeout,
    wait_all_timeout,
};
pub use any::{
    wait_any, wait_any_ctx, wait_any_res, wait_any_res_ctx, wait_any_res_timeout,
    wait_any_timeout,
};
