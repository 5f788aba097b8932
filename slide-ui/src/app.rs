//! Main COSMIC Application
//!
//! Implements the cosmic::Application trait for the SlideApp home screen

use cosmic::app::{Core, Task};
use cosmic::iced::{Alignment, Length, Padding};
use cosmic::widget::{self, container, text};
use cosmic::{Application, Element};

use slide_core::style::{self, font, palette, Control};
use slide_core::{AppConfig, Collaborator, LogCollaborator, Mode, ModeForm};

use crate::fl;
use crate::theme::{self, size, spacing};
use crate::widgets::FieldRow;

/// Application ID following reverse-DNS convention
const APP_ID: &str = "org.emersonlab.SlideApp";

/// Application state
pub struct App {
    /// COSMIC runtime core
    core: Core,
    config: AppConfig,
    /// Home form model
    form: ModeForm,
    /// Stage that receives the form values on "Begin"
    collaborator: Box<dyn Collaborator>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    SelectMode(Mode),
    UserNameChanged(String),
    OutputDirectoryChanged(String),
    Begin,
}

/// Application startup flags
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub config: AppConfig,
}

impl Application for App {
    type Executor = cosmic::executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let app = Self {
            core,
            config: flags.config,
            form: ModeForm::with_platform_defaults(),
            collaborator: Box::new(LogCollaborator),
        };

        (app, Task::none())
    }

    fn header_center(&self) -> Vec<Element<'_, Self::Message>> {
        vec![text(self.config.window_title.as_str()).size(16).into()]
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let mode_row = widget::row()
            .push(widget::horizontal_space())
            .push(self.mode_button(Mode::Researcher))
            .push(self.mode_button(Mode::Admin))
            .spacing(spacing::MODE_GAP)
            .align_y(Alignment::Center);

        let title = container(
            text(self.config.lab_title.as_str())
                .size(font::TITLE)
                .class(theme::text_color(palette::FOREGROUND)),
        )
        .width(Length::Fill)
        .align_x(Alignment::Center);

        let mut form = widget::column()
            .push(
                FieldRow::new(fl!("user-label"), self.form.user_name(), Message::UserNameChanged)
                    .view(),
            )
            .push(
                FieldRow::new(
                    fl!("output-directory-label"),
                    self.form.output_directory(),
                    Message::OutputDirectoryChanged,
                )
                .view(),
            )
            .spacing(spacing::FORM_ROWS)
            .max_width(size::FORM_MAX_WIDTH);

        if let Some(error) = self.form.status() {
            form = form.push(
                text(fl!("begin-rejected", reason = error.to_string()))
                    .size(font::STATUS)
                    .class(theme::text_color(palette::STATUS)),
            );
        }

        let form_row = widget::row()
            .push(widget::horizontal_space())
            .push(form)
            .push(widget::horizontal_space());

        let begin_row = widget::row()
            .push(widget::horizontal_space())
            .push(self.begin_button())
            .push(widget::horizontal_space());

        let content = widget::column()
            .push(mode_row)
            .push(widget::vertical_space().height(Length::Fixed(spacing::ABOVE_TITLE)))
            .push(title)
            .push(widget::vertical_space().height(Length::Fixed(spacing::ABOVE_FORM)))
            .push(form_row)
            .push(widget::vertical_space().height(Length::Fixed(spacing::ABOVE_BEGIN)))
            .push(begin_row)
            .push(widget::vertical_space())
            .width(Length::Fill)
            .height(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: 30.0,
                right: 70.0,
                bottom: 40.0,
                left: 70.0,
            })
            .class(theme::page())
            .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        apply(&mut self.form, self.collaborator.as_mut(), message);
        Task::none()
    }
}

impl App {
    /// Selector button, highlighted when its mode is active
    fn mode_button(&self, mode: Mode) -> Element<'_, Message> {
        let label = match mode {
            Mode::Researcher => fl!("researcher-mode"),
            Mode::Admin => fl!("admin-mode"),
        };
        let style = self.form.selector_style(mode);

        widget::button::custom(text(label).size(style.font_size))
            .padding([10, 18])
            .class(theme::button_class(style))
            .on_press(Message::SelectMode(mode))
            .into()
    }

    fn begin_button(&self) -> Element<'_, Message> {
        let style = style::button_style(Control::Begin, true);

        widget::button::custom(text(fl!("begin")).size(style.font_size))
            .width(Length::Fixed(size::BEGIN_WIDTH))
            .height(Length::Fixed(size::BEGIN_HEIGHT))
            .class(theme::button_class(style))
            .on_press(Message::Begin)
            .into()
    }
}

/// Route a message to the form.
fn apply(form: &mut ModeForm, collaborator: &mut dyn Collaborator, message: Message) {
    match message {
        Message::SelectMode(Mode::Researcher) => form.select_researcher_mode(),
        Message::SelectMode(Mode::Admin) => form.select_admin_mode(),
        Message::UserNameChanged(value) => form.set_user_name(value),
        Message::OutputDirectoryChanged(value) => form.set_output_directory(value),
        Message::Begin => form.submit(collaborator),
    }
}
