//! # Completion handles and spawn functions.
//!
//! This module provides the handle types and the functions that produce them:
//! - [`Task`] - completion signal for work with no result
//! - [`TaskRes`] - completion signal carrying a typed result value
//! - [`spawn`] / [`spawn_with_result`] - launch work on the tokio scheduler
//!   and return the matching handle immediately

mod task;
mod task_res;

pub use task::{spawn, Task};
pub use task_res::{spawn_with_result, TaskRes};
