//! Translation lookup and placeholder interpolation.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::i18n::messages::{MessageTree, MessagesByLocale};

/// Locale whose dictionary is used when the active locale has none.
pub const FALLBACK_LOCALE: &str = "en";

/// Translation parameters: placeholder name -> replacement.
pub type TranslationParams = HashMap<String, String>;

/// What: Pick the dictionary for a locale.
///
/// Inputs:
/// - `messages`: All dictionaries
/// - `locale`: Active locale code
///
/// Output:
/// - `messages[locale]`, else `messages["en"]`, else `None`
///
/// Details:
/// - The fallback is per dictionary: an existing but incomplete dictionary is
///   used as-is
#[must_use]
pub fn messages_for<'a>(messages: &'a MessagesByLocale, locale: &str) -> Option<&'a MessageTree> {
    messages
        .get(locale)
        .or_else(|| messages.get(FALLBACK_LOCALE))
}

/// What: Look up a dotted key in a message tree.
///
/// Inputs:
/// - `tree`: Dictionary to search
/// - `key`: Dot-notation key (e.g. "home.header.notify")
///
/// Output:
/// - The string leaf, or `None` if a segment is missing, the walk hits a
///   non-object before the last segment, or the leaf is not a string
#[must_use]
pub fn lookup<'a>(tree: &'a MessageTree, key: &str) -> Option<&'a str> {
    let mut segments = key.split('.');
    let first = segments.next()?;
    let mut current = tree.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    current.as_str()
}

/// Compiled `{identifier}` pattern.
fn placeholder_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").ok())
        .as_ref()
}

/// What: Replace `{identifier}` placeholders.
///
/// Inputs:
/// - `message`: Template (e.g. "Welcome to {appName}")
/// - `params`: Placeholder values
///
/// Output:
/// - Message with every placeholder replaced; unknown placeholders become ""
///
/// Details:
/// - Identifiers are ASCII word characters; braces around anything else are
///   left untouched
#[must_use]
pub fn interpolate(message: &str, params: &TranslationParams) -> String {
    let Some(pattern) = placeholder_pattern() else {
        return message.to_string();
    };
    pattern
        .replace_all(message, |caps: &Captures<'_>| {
            params.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// What: Translate a key for a locale.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `messages`: All dictionaries
/// - `locale`: Active locale code
/// - `params`: Optional placeholder values
///
/// Output:
/// - The translated (and interpolated) string, or the key itself when no
///   string is found
///
/// Details:
/// - Missing keys are logged at debug level and never fail
/// - Interpolation also applies when the key itself is returned
#[must_use]
pub fn translate(
    key: &str,
    messages: &MessagesByLocale,
    locale: &str,
    params: Option<&TranslationParams>,
) -> String {
    let message = messages_for(messages, locale)
        .and_then(|dict| lookup(dict, key))
        .unwrap_or_else(|| {
            tracing::debug!(
                "Missing translation key: '{}' for locale '{}'. Returning key as-is.",
                key,
                locale
            );
            key
        });

    match params {
        Some(params) => interpolate(message, params),
        None => message.to_string(),
    }
}
