//! UI chrome translations.
//!
//! Catalogs live in `i18n/<locale>/ulfa-ui.ftl` and are embedded into the binary; `en-US`
//! is the fallback every other locale must mirror (checked by `tests/translations.rs`).
//! Product, maker and perk copy comes from the content file and is not translated.
//!
//! Components look messages up with [`t!`](crate::t), which checks ids at compile time:
//!
//! ```ignore
//! let label = t!("nav-products");
//! ```
//!
//! A right-to-left locale also needs its primary subtag in [`RTL_LANGUAGES`].

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message in the site catalog.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

// Must match the catalog file stem and the `fl!` domain (the crate name).
const DOMAIN: &str = "ulfa-ui";
const FALLBACK: &str = "en-US";

/// Primary language subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "ur"];

#[derive(Embed)]
#[folder = "i18n"]
struct Catalogs;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("fallback tag parses");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the catalogs, preferring the visitor's languages. Safe to call on every render.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Catalogs, &requested) {
            Ok(selected) => tracing::debug!(?selected, "translations loaded"),
            Err(err) => tracing::warn!(%err, "language selection failed; using {FALLBACK}"),
        }
    });
}

/// Switch to `tag`. Unparseable tags are ignored; unknown locales keep the fallback chain.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring malformed language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Catalogs, &[lang])?;
    Ok(())
}

/// Locales with an embedded catalog, sorted, for the language picker.
pub fn available_languages() -> Vec<String> {
    let mut tags: Vec<String> = Catalogs::iter()
        .filter_map(|path| path.split('/').next().map(str::to_owned))
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Tag the loader currently resolves messages for, e.g. `en-US`.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// `dir` attribute value for `tag`.
pub fn text_direction(tag: &str) -> &'static str {
    let primary = tag.split(['-', '_']).next().unwrap_or_default();
    if RTL_LANGUAGES.contains(&primary) {
        "rtl"
    } else {
        "ltr"
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
