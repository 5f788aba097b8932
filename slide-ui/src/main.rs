//! SlideApp - Home screen entry point
//!
//! Desktop form where the user picks Researcher or Admin mode, enters a user
//! name and output directory, and presses "Begin".

mod app;
mod i18n;
mod theme;
mod widgets;

use anyhow::Context;
use slide_core::AppConfig;

fn main() -> anyhow::Result<()> {
    slide_core::logging::init_tracing(tracing::Level::INFO);

    // Get the system's preferred languages for i18n
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let config = AppConfig::default();

    // Configure application window settings
    let settings = cosmic::app::Settings::default()
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(config.window.min_width)
                .min_height(config.window.min_height),
        )
        .size(cosmic::iced::Size::new(config.window.width, config.window.height));

    tracing::info!("SlideApp {} starting", slide_core::version());

    cosmic::app::run::<app::App>(settings, app::Flags { config })
        .context("SlideApp event loop failed")
}
