//! Operating mode selected on the home screen.

use serde::{Deserialize, Serialize};

/// Mutually exclusive operating context chosen before starting a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Researcher,
    Admin,
}

impl Mode {
    /// Both modes, in the order their selectors are laid out.
    pub const ALL: [Mode; 2] = [Mode::Researcher, Mode::Admin];

    /// The mode that is deactivated when this one is selected.
    pub fn other(self) -> Mode {
        match self {
            Mode::Researcher => Mode::Admin,
            Mode::Admin => Mode::Researcher,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Researcher => write!(f, "researcher"),
            Mode::Admin => write!(f, "admin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_researcher() {
        assert_eq!(Mode::default(), Mode::Researcher);
    }

    #[test]
    fn other_swaps() {
        assert_eq!(Mode::Researcher.other(), Mode::Admin);
        assert_eq!(Mode::Admin.other(), Mode::Researcher);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Admin).unwrap(), "\"admin\"");
        assert_eq!(Mode::Researcher.to_string(), "researcher");
    }
}
