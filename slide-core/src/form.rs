//! Home form state
//!
//! [`ModeForm`] is the headless model behind the home screen. The UI crate
//! renders it and forwards widget events to it.

use tracing::{debug, info, warn};

use crate::collaborator::{BeginRequest, Collaborator, HandoffError};
use crate::mode::Mode;
use crate::paths;
use crate::style::{self, ButtonStyle, Control};

/// Values the user can edit on the home screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FormState {
    mode: Mode,
    user_name: String,
    output_directory: String,
}

/// Home form model
#[derive(Debug, Clone, Default)]
pub struct ModeForm {
    state: FormState,
    // Last rejection from the collaborator, cleared by an accepted submit
    status: Option<HandoffError>,
}

impl ModeForm {
    /// Create a form whose output directory starts at `output_directory`.
    pub fn new(output_directory: impl Into<String>) -> Self {
        Self {
            state: FormState {
                output_directory: output_directory.into(),
                ..FormState::default()
            },
            status: None,
        }
    }

    /// Create a form with the platform downloads folder as output directory.
    ///
    /// The field holds text, so a path that is not valid UTF-8 is converted
    /// lossily and invalid bytes become U+FFFD.
    pub fn with_platform_defaults() -> Self {
        let output_directory = paths::default_output_directory();
        debug!("Default output directory: {}", output_directory.display());
        Self::new(output_directory.to_string_lossy().into_owned())
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn user_name(&self) -> &str {
        &self.state.user_name
    }

    pub fn output_directory(&self) -> &str {
        &self.state.output_directory
    }

    pub fn status(&self) -> Option<&HandoffError> {
        self.status.as_ref()
    }

    /// Whether the selector for `mode` is the highlighted one.
    pub fn is_active(&self, mode: Mode) -> bool {
        self.state.mode == mode
    }

    /// Make `mode` active and the other mode inactive.
    pub fn select_mode(&mut self, mode: Mode) {
        debug!("{} mode active, {} mode inactive", mode, mode.other());
        self.state.mode = mode;
    }

    pub fn select_researcher_mode(&mut self) {
        self.select_mode(Mode::Researcher);
    }

    pub fn select_admin_mode(&mut self) {
        self.select_mode(Mode::Admin);
    }

    pub fn set_user_name(&mut self, user_name: String) {
        self.state.user_name = user_name;
    }

    pub fn set_output_directory(&mut self, output_directory: String) {
        debug!("Output directory edited: {}", output_directory);
        self.state.output_directory = output_directory;
    }

    /// Style of the selector button for `mode` in the current state.
    pub fn selector_style(&self, mode: Mode) -> &'static ButtonStyle {
        style::button_style(Control::for_mode(mode), self.is_active(mode))
    }

    /// Snapshot of the current values, exactly as typed.
    pub fn request(&self) -> BeginRequest {
        BeginRequest {
            mode: self.state.mode,
            user_name: self.state.user_name.clone(),
            output_directory: self.state.output_directory.clone(),
        }
    }

    /// Hand the current values to `collaborator`.
    ///
    /// A rejection is kept in [`status`](Self::status) until the next
    /// accepted submit.
    pub fn submit(&mut self, collaborator: &mut dyn Collaborator) {
        let request = self.request();
        info!("Begin as {} for user '{}'", request.mode, request.user_name);

        match collaborator.begin(request) {
            Ok(()) => self.status = None,
            Err(e) => {
                warn!("Begin was not accepted: {}", e);
                self.status = Some(e);
            }
        }
    }
}
