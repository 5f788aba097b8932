//! Button style table for the home form.
//!
//! Styles are looked up by control and whether that control is the active
//! one. The UI crate turns these into toolkit button classes.

use crate::mode::Mode;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Page-level colors.
pub mod palette {
    use super::Rgb;

    /// Window background
    pub const WINDOW_BACKGROUND: Rgb = Rgb::hex(0x000000);

    /// Labels and title
    pub const FOREGROUND: Rgb = Rgb::hex(0xF2F2F2);

    /// Status line shown when the hand-off is rejected
    pub const STATUS: Rgb = Rgb::hex(0xFF9A9A);
}

/// Font sizes.
pub mod font {
    pub const TITLE: u16 = 78;
    pub const FIELD: u16 = 42;
    pub const MODE_BUTTON: u16 = 25;
    pub const BEGIN_BUTTON: u16 = 58;
    pub const STATUS: u16 = 20;
}

/// Buttons that carry a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    ResearcherMode,
    AdminMode,
    Begin,
}

impl Control {
    /// The selector button for a mode.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Researcher => Control::ResearcherMode,
            Mode::Admin => Control::AdminMode,
        }
    }
}

/// Visual style of one button in one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub background: Rgb,
    pub hovered: Rgb,
    pub pressed: Rgb,
    pub text: Rgb,
    pub radius: f32,
    pub font_size: u16,
}

const RESEARCHER_ACTIVE: ButtonStyle = ButtonStyle {
    background: Rgb::hex(0x84F28A),
    hovered: Rgb::hex(0x84F28A),
    pressed: Rgb::hex(0x84F28A),
    text: Rgb::hex(0x000000),
    radius: 11.0,
    font_size: font::MODE_BUTTON,
};

const ADMIN_ACTIVE: ButtonStyle = ButtonStyle {
    background: Rgb::hex(0xF26565),
    hovered: Rgb::hex(0xF26565),
    pressed: Rgb::hex(0xF26565),
    text: Rgb::hex(0x000000),
    radius: 11.0,
    font_size: font::MODE_BUTTON,
};

const MODE_INACTIVE: ButtonStyle = ButtonStyle {
    background: Rgb::hex(0xD9D9D9),
    hovered: Rgb::hex(0xECECEC),
    pressed: Rgb::hex(0xBBBBBB),
    text: Rgb::hex(0x111111),
    radius: 11.0,
    font_size: font::MODE_BUTTON,
};

const BEGIN: ButtonStyle = ButtonStyle {
    background: Rgb::hex(0x84F28A),
    hovered: Rgb::hex(0x95F69A),
    pressed: Rgb::hex(0x76E87D),
    text: Rgb::hex(0x000000),
    radius: 36.0,
    font_size: font::BEGIN_BUTTON,
};

/// Look up the style for a control in the given activation state.
///
/// `Begin` has a single style; `active` is ignored for it.
pub fn button_style(control: Control, active: bool) -> &'static ButtonStyle {
    match (control, active) {
        (Control::ResearcherMode, true) => &RESEARCHER_ACTIVE,
        (Control::AdminMode, true) => &ADMIN_ACTIVE,
        (Control::ResearcherMode | Control::AdminMode, false) => &MODE_INACTIVE,
        (Control::Begin, _) => &BEGIN,
    }
}
