//! Runtime module
//!
//! Task handles for the single in-flight contents update.

pub mod async_task;

pub use async_task::AsyncTask;
