//! Convenient macros for application messaging and logging.
//!
//! Every user-visible line goes through one of these macros. In normal mode
//! they print straight to the console; in debug mode (`DUKE_DEBUG` or
//! `RUST_LOG` set) they are routed through `tracing` so they interleave with
//! the debug log.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: plain message display
//! - **`msg_success!`**, **`msg_info!`**: prefixed display
//! - **`msg_error!`**: errors, to stderr in normal mode
//! - **`msg_debug!`**: debug-only messages
//! - **`msg_bail_anyhow!`**: return early with an `anyhow::Error` carrying the message
//!
//! ## Usage Examples
//!
//! ```rust
//! use duke::{msg_info, msg_error};
//! use duke::libs::messages::Message;
//!
//! msg_info!(Message::NoTasks);
//! msg_error!(Message::AfterTaskUnavailable);
//! ```

use std::sync::OnceLock;

/// Debug mode is decided once per process.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("DUKE_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
