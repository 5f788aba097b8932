//! Localized strings for the home screen, loaded from `i18n/<lang>/slide_ui.ftl`

use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    LanguageLoader,
};
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let loader = fluent_language_loader!();
    // English is embedded at build time
    loader
        .load_fallback_language(&Localizations)
        .expect("embedded fallback language");
    loader
});

/// Select the best available translation for the requested languages.
///
/// Falls back to English when none of them is bundled.
pub fn init(requested_languages: &[LanguageIdentifier]) {
    match i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, requested_languages) {
        Ok(selected) => tracing::debug!("Selected languages: {:?}", selected),
        Err(e) => tracing::warn!("Failed to load requested languages: {}", e),
    }
}

/// Get a localized string by key
#[macro_export]
macro_rules! fl {
    ($key:expr) => {
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $key)
    };
    ($key:expr, $($arg:tt)*) => {
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $key, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn english_fallback_is_loaded() {
        assert_eq!(crate::fl!("begin"), "Begin");
        assert_eq!(crate::fl!("researcher-mode"), "Researcher Mode");
    }

    #[test]
    fn rejection_message_carries_reason() {
        let message = crate::fl!("begin-rejected", reason = "no user");
        assert!(message.contains("no user"));
    }
}
