//! Core library modules for the duke application.
//!
//! ## Features
//!
//! - **Task Model**: to-dos, deadlines and events with tags and follow-ups
//! - **Task List**: position-addressed collection with add/done/delete/find
//! - **Core Infrastructure**: configuration, data storage, messaging, logging
//! - **User Interface**: console rendering of task lists
//!
//! ## Usage
//!
//! ```rust
//! use duke::libs::task::Task;
//! use duke::libs::task_list::TaskList;
//!
//! let mut list = TaskList::new();
//! list.add(Task::deadline("return book", "2/12/2019 1800")?);
//! let done = list.mark_done(0)?;
//! assert_eq!(done.to_string(), "[X][D] return book (by: 02 Dec 2019 18:00)");
//! # Ok::<(), duke::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod task;
pub mod task_list;
pub mod view;
