//! Internationalization (i18n) support for `coursefront-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/coursefront-ui.ftl   (fallback/reference)
//!   bn-BD/coursefront-ui.ftl   (Bangla)
//! ```
//!
//! The page only ships in the two languages of [`api::Language`]; the active
//! catalog always follows the selected content language, so `apply()` takes a
//! `Language` rather than a free-form tag.
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let retry_label = t!("error-retry");
//! ```

use std::sync::Once;

use api::Language;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("error-retry")
///     t!("hero-discount", percent = "97")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "coursefront-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n with the English fallback (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let fallback: LanguageIdentifier =
            "en-US".parse().expect("valid fallback language identifier");
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[fallback]) {
            eprintln!("[i18n] Failed selecting fallback language ({err}); continuing");
        }
    });
}

/// Switch the chrome strings to the catalog for a content language.
pub fn apply(language: Language) {
    init();
    let tag: LanguageIdentifier = match language.bcp47().parse() {
        Ok(tag) => tag,
        Err(_) => return,
    };
    if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[tag]) {
        eprintln!(
            "[i18n] Failed selecting {} ({err}); keeping previous catalog",
            language.bcp47()
        );
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn both_shipping_languages_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "bn-BD"));
    }

    // Single test because the loader is global; parallel catalog switches
    // would observe each other.
    #[test]
    fn catalog_switching_changes_lookups() {
        init();
        apply(Language::En);
        assert_eq!(fl!(&*LOADER, "error-retry"), "Try again");
        assert_eq!(fl!(&*LOADER, "nav-course"), "Course");

        apply(Language::Bn);
        assert_eq!(fl!(&*LOADER, "nav-course"), "কোর্স");

        apply(Language::En);
        assert_eq!(fl!(&*LOADER, "nav-course"), "Course");
    }
}
