//! Hand-off from the home form to the stage that begins processing.
//!
//! The form performs no validation of its own. Whatever receives the
//! [`BeginRequest`] decides whether the values are acceptable and reports a
//! [`HandoffError`] if not.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::mode::Mode;

/// Values handed off when "Begin" is activated, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginRequest {
    pub mode: Mode,
    pub user_name: String,
    pub output_directory: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandoffError {
    #[error("{0}")]
    Rejected(String),

    #[error("Processing stage is no longer listening")]
    Disconnected,
}

/// Downstream stage invoked with the form's values.
pub trait Collaborator: Send {
    fn begin(&mut self, request: BeginRequest) -> Result<(), HandoffError>;
}

/// Accepts every request and records it in the application log.
#[derive(Debug, Default)]
pub struct LogCollaborator;

impl Collaborator for LogCollaborator {
    fn begin(&mut self, request: BeginRequest) -> Result<(), HandoffError> {
        let payload = serde_json::to_string(&request).unwrap_or_default();
        info!(
            mode = %request.mode,
            user = %request.user_name,
            output_directory = %request.output_directory,
            "Begin requested: {}",
            payload
        );
        Ok(())
    }
}

/// Forwards requests to a receiver, typically on another thread.
#[derive(Debug)]
pub struct ChannelCollaborator {
    sender: Sender<BeginRequest>,
}

impl ChannelCollaborator {
    pub fn new(sender: Sender<BeginRequest>) -> Self {
        Self { sender }
    }
}

impl Collaborator for ChannelCollaborator {
    fn begin(&mut self, request: BeginRequest) -> Result<(), HandoffError> {
        self.sender
            .send(request)
            .map_err(|_| HandoffError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn request() -> BeginRequest {
        BeginRequest {
            mode: Mode::Admin,
            user_name: "bob".to_string(),
            output_directory: "/data/out".to_string(),
        }
    }

    #[test]
    fn log_collaborator_accepts() {
        crate::logging::init_test_tracing();
        assert!(LogCollaborator.begin(request()).is_ok());
    }

    #[test]
    fn channel_forwards_request() {
        let (tx, rx) = mpsc::channel();
        let mut collaborator = ChannelCollaborator::new(tx);

        collaborator.begin(request()).unwrap();

        assert_eq!(rx.try_recv().unwrap(), request());
    }

    #[test]
    fn channel_reports_disconnect() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut collaborator = ChannelCollaborator::new(tx);

        assert_eq!(collaborator.begin(request()), Err(HandoffError::Disconnected));
    }

    #[test]
    fn request_json_shape() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["mode"], "admin");
        assert_eq!(json["user_name"], "bob");
        assert_eq!(json["output_directory"], "/data/out");
    }
}
