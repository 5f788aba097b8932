//! Application configuration
//!
//! Window and title settings for the home screen. These are fixed at build
//! time; nothing is loaded from or saved to disk.

/// Window geometry in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 980.0,
            height: 680.0,
            min_width: 840.0,
            min_height: 560.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Window title
    pub window_title: String,
    /// Heading shown above the form
    pub lab_title: String,
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "SlideApp".to_string(),
            lab_title: "Emerson Lab".to_string(),
            window: WindowConfig::default(),
        }
    }
}
