//! Page-chrome localization.
//!
//! Bundles live in `i18n/<locale>/sentinel_ui.ftl` and are embedded at compile
//! time; `t!` lookups are checked against the en-US bundle by `i18n-embed-fl`.
//! Narrator lines and the reference tables stay in English.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a chrome string in the active bundle, e.g. `t!("landing-start")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
}

/// Must equal the crate name with underscores; `fl!` resolves the FTL file from it.
const DOMAIN: &str = "sentinel_ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Bundles;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Select the host's preferred locale once per process.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Bundles, &requested) {
            Ok(selected) => tracing::debug!(?selected, "locale selected"),
            Err(err) => tracing::warn!(%err, "locale selection failed; using {FALLBACK}"),
        }
    });
}

/// Tag of the bundle currently answering lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Switch to an embedded locale. Tags that are malformed or not bundled leave
/// the active locale untouched.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    if !available_languages().iter().any(|l| l == tag) {
        tracing::debug!(tag, "ignoring locale without a bundle");
        return Ok(());
    }
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Bundles, &[lang]).map(|_| ())
}

/// Locale directories embedded in the binary, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Bundles::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
