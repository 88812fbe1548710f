//! Flat-file persistence for the task list.
//!
//! [`tasks::TaskFile`] owns the file on disk; [`codec`] turns a single task
//! into one line of text and back.

pub mod codec;
pub mod tasks;

pub use tasks::TaskFile;
