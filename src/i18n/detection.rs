//! Locale detection from request paths and `Accept-Language` headers.

use crate::config::DEFAULT_LOCALE;
use crate::i18n::locale::{Locale, contains_locale};

/// Locales checked by path parsing when no locale list is available.
pub const BUILTIN_PATH_LOCALES: [&str; 2] = ["en", "zh"];

/// What: Find a locale prefix at the start of a path.
///
/// Inputs:
/// - `path`: Request path (e.g. "/ja/home")
/// - `locales`: Configured locales, in priority order
///
/// Output:
/// - The first code `c` (in configured order) such that `path == "/c"` or
///   `path` starts with `"/c/"`, or `None`
///
/// Details:
/// - An empty list falls back to [`BUILTIN_PATH_LOCALES`]
/// - Matching is exact and case-sensitive; `/english` does not match `en`
#[must_use]
pub fn parse_locale_from_path<'a>(path: &str, locales: &'a [Locale]) -> Option<&'a str> {
    if locales.is_empty() {
        return BUILTIN_PATH_LOCALES
            .into_iter()
            .find(|code| path_has_locale(path, code));
    }
    locales
        .iter()
        .map(Locale::code)
        .find(|code| path_has_locale(path, code))
}

/// Whether `path` is `/{code}` or lives under `/{code}/`.
fn path_has_locale(path: &str, code: &str) -> bool {
    path.strip_prefix('/')
        .and_then(|rest| rest.strip_prefix(code))
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// What: Extract the primary language tag from an `Accept-Language` header.
///
/// Inputs:
/// - `header`: Raw header value (e.g. "zh-CN,zh;q=0.9,en;q=0.8")
///
/// Output:
/// - The first comma-separated entry, trimmed and without `;` parameters,
///   or `None` when that entry is empty
#[must_use]
pub fn primary_language_tag(header: &str) -> Option<&str> {
    let first = header.split(',').next()?;
    let tag = first.split(';').next().unwrap_or(first).trim();
    if tag.is_empty() { None } else { Some(tag) }
}

/// What: Expand a language tag into its cumulative prefixes.
///
/// Inputs:
/// - `tag`: Language tag (e.g. "zh-Hans-CN")
///
/// Output:
/// - Left-anchored prefixes in ascending specificity:
///   `["zh", "zh-Hans", "zh-Hans-CN"]`
#[must_use]
pub fn locale_variants(tag: &str) -> Vec<String> {
    let mut variants = Vec::new();
    let mut current = String::new();
    for part in tag.split('-') {
        if !current.is_empty() {
            current.push('-');
        }
        current.push_str(part);
        variants.push(current.clone());
    }
    variants
}

/// What: Detect a locale from an `Accept-Language` header.
///
/// Inputs:
/// - `accept_language`: Header value, if the request carried one
/// - `locales`: Configured locales
/// - `default_locale`: Fallback locale
///
/// Output:
/// - The first variant of the primary tag (least specific first) that is a
///   configured locale, otherwise `default_locale`
///
/// Details:
/// - An empty `default_locale` is treated as "en"
#[must_use]
pub fn detect_locale(accept_language: Option<&str>, locales: &[Locale], default_locale: &str) -> String {
    let default_locale = if default_locale.is_empty() {
        DEFAULT_LOCALE
    } else {
        default_locale
    };

    let Some(tag) = accept_language.and_then(primary_language_tag) else {
        return default_locale.to_string();
    };

    locale_variants(tag)
        .into_iter()
        .find(|variant| contains_locale(locales, variant))
        .unwrap_or_else(|| default_locale.to_string())
}

/// What: Resolve the active locale for a request.
///
/// Inputs:
/// - `path`: Request path
/// - `accept_language`: `Accept-Language` header, if any
/// - `locales`: Configured locales
/// - `default_locale`: Fallback locale
///
/// Output:
/// - The path locale when the path carries one (the header is then ignored),
///   otherwise [`detect_locale`]
#[must_use]
pub fn resolve_locale(
    path: &str,
    accept_language: Option<&str>,
    locales: &[Locale],
    default_locale: &str,
) -> String {
    parse_locale_from_path(path, locales).map_or_else(
        || detect_locale(accept_language, locales, default_locale),
        str::to_string,
    )
}
