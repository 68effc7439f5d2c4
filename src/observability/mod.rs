//! Logging setup and crash reporting for the `bizdoctor` binary.
//!
//! Library code only emits `tracing` events. Installing a subscriber is
//! the binary's job:
//!
//! ```ignore
//! use bizdoctor::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     init_tracing(1, None);
//!     install_panic_hook("report");
//! }
//! ```

pub mod panic_hook;

pub use panic_hook::install_panic_hook;

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Filter directive for a `-v` count, falling back to the configured level.
pub fn level_for_verbosity(verbosity: u8, configured: Option<&str>) -> String {
    match verbosity {
        0 => configured.unwrap_or(DEFAULT_LEVEL).to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` takes precedence over both
/// `-v` and the config file.
pub fn init_tracing(verbosity: u8, configured: Option<&str>) {
    let fallback = level_for_verbosity(verbosity, configured);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
