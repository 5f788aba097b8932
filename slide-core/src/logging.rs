//! Logging setup for SlideApp.
//!
//! Everything logs through `tracing`; this module only installs the global
//! subscriber.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the application-wide subscriber.
///
/// `RUST_LOG` directives win; anything they leave unset logs at
/// `default_level`. Call once at startup.
pub fn init_tracing(default_level: Level) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(env_filter(default_level))
        .init();
}

fn env_filter(default_level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy()
}

/// Initialize tracing for tests (only logs warnings and above).
///
/// Safe to call from every test; only the first call installs a subscriber.
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_can_be_installed_repeatedly() {
        init_test_tracing();
        init_test_tracing();
        tracing::warn!("still logging after a second init");
    }
}
