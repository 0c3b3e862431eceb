//! Runtime module
//!
//! Provides the async task execution primitive used by the GitHub operations.

pub mod async_task;

pub use async_task::AsyncTask;
