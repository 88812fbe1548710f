use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber when debug mode is on.
///
/// `RUST_LOG` picks the filter; with only `DUKE_DEBUG` set everything from
/// this crate at debug level is shown.
pub fn init() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("duke=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
