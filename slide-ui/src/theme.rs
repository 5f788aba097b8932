//! Theme configuration for SlideApp.
//!
//! Maps the core style table onto COSMIC widget classes.

use cosmic::iced::widget::container;
use cosmic::iced::{Background, Color};
use cosmic::widget::button;

use slide_core::style::{palette, ButtonStyle, Rgb};

/// Spacing constants.
pub mod spacing {
    /// Gap between the two mode selectors
    pub const MODE_GAP: u16 = 10;
    /// Gap between the mode row and the title
    pub const ABOVE_TITLE: f32 = 86.0;
    /// Gap between the title and the form
    pub const ABOVE_FORM: f32 = 44.0;
    /// Gap between form rows
    pub const FORM_ROWS: u16 = 18;
    /// Gap between a field label and its input
    pub const LABEL_INPUT: u16 = 14;
    /// Gap between the form and the Begin button
    pub const ABOVE_BEGIN: f32 = 64.0;
}

/// Size constants.
pub mod size {
    pub const FORM_MAX_WIDTH: f32 = 760.0;
    pub const BEGIN_WIDTH: f32 = 210.0;
    pub const BEGIN_HEIGHT: f32 = 74.0;
}

pub fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Text class with a fixed palette color.
pub fn text_color(rgb: Rgb) -> cosmic::theme::Text {
    cosmic::theme::Text::Color(color(rgb))
}

/// Black page background with light foreground.
pub fn page() -> cosmic::theme::Container<'static> {
    cosmic::theme::Container::custom(|_theme| container::Style {
        background: Some(Background::Color(color(palette::WINDOW_BACKGROUND))),
        text_color: Some(color(palette::FOREGROUND)),
        ..Default::default()
    })
}

/// Button class drawing `style` in each interaction state.
pub fn button_class(style: &'static ButtonStyle) -> cosmic::theme::Button {
    cosmic::theme::Button::Custom {
        active: Box::new(move |_focused, _theme| appearance(style, style.background)),
        disabled: Box::new(move |_theme| appearance(style, style.background)),
        hovered: Box::new(move |_focused, _theme| appearance(style, style.hovered)),
        pressed: Box::new(move |_focused, _theme| appearance(style, style.pressed)),
    }
}

fn appearance(style: &ButtonStyle, background: Rgb) -> button::Style {
    button::Style {
        background: Some(Background::Color(color(background))),
        text_color: Some(color(style.text)),
        border_radius: style.radius.into(),
        ..button::Style::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slide_core::style::{button_style, Control};

    #[test]
    fn color_converts_channels() {
        assert_eq!(color(Rgb::hex(0xFF0000)), Color::from_rgb(1.0, 0.0, 0.0));
        assert_eq!(color(palette::WINDOW_BACKGROUND), Color::BLACK);
    }

    #[test]
    fn hovered_inactive_selector_lightens() {
        let style = button_style(Control::AdminMode, false);
        let idle = appearance(style, style.background);
        let hovered = appearance(style, style.hovered);
        assert_ne!(idle.background, hovered.background);
        assert_eq!(idle.text_color, hovered.text_color);
    }
}
