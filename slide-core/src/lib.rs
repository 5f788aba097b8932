//! Slide Core - Home form state for SlideApp
//!
//! This crate holds everything behind the home screen with zero UI
//! dependencies: the Researcher/Admin mode machine, the button style table,
//! the default output directory and the hand-off to whatever stage runs
//! after "Begin".

pub mod collaborator;
pub mod config;
pub mod form;
pub mod logging;
pub mod mode;
pub mod paths;
pub mod style;

pub use collaborator::{BeginRequest, ChannelCollaborator, Collaborator, HandoffError, LogCollaborator};
pub use config::AppConfig;
pub use form::ModeForm;
pub use mode::Mode;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
