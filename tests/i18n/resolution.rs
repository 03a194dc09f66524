//! Integration tests for request locale resolution.
//!
//! Tests cover:
//! - Path prefixes overriding the header
//! - Header detection with variant expansion
//! - Default locale fallback
//! - Redirect decisions for unprefixed paths

use i18n_code::i18n::{LocaleResolver, LocaleSource, LocaleState, handle_request};
use i18n_code::{Locale, RuntimeConfig};

/// What: Build a normalised runtime config.
///
/// Inputs:
/// - `default_locale`: Default locale code
/// - `codes`: Configured locale codes
///
/// Output:
/// - `RuntimeConfig` ready for resolution
fn config(default_locale: &str, codes: &[&str]) -> RuntimeConfig {
    RuntimeConfig {
        default_locale: default_locale.to_string(),
        locales: codes.iter().copied().map(Locale::from).collect(),
        ..RuntimeConfig::default()
    }
    .normalized()
}

#[test]
/// What: Path match takes precedence over the header.
///
/// Inputs:
/// - Config `{defaultLocale: ja, locales: [en, ja, zh]}`, path `/ja/home`,
///   header `zh-CN,zh;q=0.9`
///
/// Output:
/// - `ja`
fn integration_path_beats_header() {
    let resolver = LocaleResolver::new(&config("ja", &["en", "ja", "zh"]));
    assert_eq!(resolver.resolve("/ja/home", Some("zh-CN,zh;q=0.9")), "ja");
}

#[test]
/// What: Header decides when the path has no locale.
///
/// Inputs:
/// - Config `{defaultLocale: zh, locales: [zh, en, ja]}`, path `/dashboard`, header `ja`
///
/// Output:
/// - `ja`
fn integration_header_detection() {
    let resolver = LocaleResolver::new(&config("zh", &["zh", "en", "ja"]));
    assert_eq!(resolver.resolve("/dashboard", Some("ja")), "ja");
}

#[test]
/// What: Every configured prefix wins regardless of the header.
fn integration_any_prefix_is_authoritative() {
    let codes = ["en", "ja", "zh", "zh-TW"];
    let resolver = LocaleResolver::new(&config("en", &codes));
    for code in codes {
        for header in [None, Some("fr"), Some("ja,en"), Some("")] {
            assert_eq!(resolver.resolve(&format!("/{code}"), header), code);
            assert_eq!(resolver.resolve(&format!("/{code}/a/b"), header), code);
        }
    }
}

#[test]
/// What: Headers with no matching variant fall back to the default.
fn integration_unmatched_header_uses_default() {
    let resolver = LocaleResolver::new(&config("zh", &["zh", "en"]));
    for header in ["fr-FR,fr;q=0.9", "de", "*", "x-klingon", ",en"] {
        assert_eq!(resolver.resolve("/about", Some(header)), "zh", "header {header}");
    }
    assert_eq!(resolver.resolve("/about", None), "zh");
}

#[test]
/// What: Variant expansion tries the least specific prefix first.
fn integration_variant_order() {
    let resolver = LocaleResolver::new(&config("en", &["en", "zh-Hans", "zh"]));
    assert_eq!(resolver.resolve("/", Some("zh-Hans-CN")), "zh");
    let resolver = LocaleResolver::new(&config("en", &["en", "zh-Hans"]));
    assert_eq!(resolver.resolve("/", Some("zh-Hans-CN")), "zh-Hans");
}

#[test]
/// What: Request handling stores the locale and redirects unprefixed paths.
fn integration_handle_request_redirects() {
    let cfg = config("ja", &["en", "ja", "zh"]);

    let mut state = LocaleState::new();
    let outcome = handle_request("/", Some("en-US,en;q=0.5"), &cfg, &mut state);
    assert_eq!(outcome.source, LocaleSource::Header);
    assert_eq!(outcome.redirect.as_deref(), Some("/en"));
    assert_eq!(state.get(&cfg.default_locale), "en");

    let mut state = LocaleState::new();
    let outcome = handle_request("/zh/news/1", Some("en"), &cfg, &mut state);
    assert_eq!(outcome.source, LocaleSource::Path);
    assert_eq!(outcome.redirect, None);
    assert_eq!(state.get(&cfg.default_locale), "zh");
}
