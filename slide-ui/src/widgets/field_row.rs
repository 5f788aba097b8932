//! Labelled text field
//!
//! A label followed by a text input that stretches to fill the row

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, text, text_input};
use cosmic::Element;

use slide_core::style::{font, palette};

use crate::theme::{self, spacing};

/// Field row component
pub struct FieldRow<'a, M> {
    label: String,
    value: &'a str,
    on_change: Box<dyn Fn(String) -> M + 'a>,
}

impl<'a, M: Clone + 'a> FieldRow<'a, M> {
    pub fn new(label: String, value: &'a str, on_change: impl Fn(String) -> M + 'a) -> Self {
        Self {
            label,
            value,
            on_change: Box::new(on_change),
        }
    }

    pub fn view(self) -> Element<'a, M> {
        widget::row()
            .push(
                text(self.label)
                    .size(font::FIELD)
                    .class(theme::text_color(palette::FOREGROUND)),
            )
            .push(
                text_input("", self.value)
                    .on_input(self.on_change)
                    .width(Length::Fill),
            )
            .spacing(spacing::LABEL_INPUT)
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .into()
    }
}
