//! # Duke - line-oriented personal task tracker
//!
//! Keeps to-dos, deadlines and events in a flat text file and drives them
//! from an interactive command loop.
//!
//! ## Features
//!
//! - **Three task kinds**: plain to-dos, deadlines (`/by`) and events (`/at`)
//! - **Completion**: mark tasks done or not done by their list number
//! - **Search**: literal substring search over descriptions
//! - **Tags**: free-form labels for filtering
//! - **Follow-ups**: a to-do that unlocks once its owner is done
//! - **Persistence**: every change is written to the task file immediately
//!
//! ## Usage
//!
//! ```rust,no_run
//! use duke::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod storage;
