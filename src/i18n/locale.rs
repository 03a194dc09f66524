//! Locale identifiers and configured locale lists.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A configured locale: either a bare code (`"en"`) or a code with a display name.
///
/// Identity is the code alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Locale {
    /// Code with an optional human-readable name (e.g. `{ code: "ja", name: "日本語" }`).
    Named {
        /// Locale code.
        code: String,
        /// Display name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Bare locale code.
    Code(String),
}

impl Locale {
    /// What: Build a locale with a display name.
    #[must_use]
    pub fn named(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            code: code.into(),
            name: Some(name.into()),
        }
    }

    /// Locale code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Named { code, .. } | Self::Code(code) => code,
        }
    }

    /// What: Display name of the locale.
    ///
    /// Output:
    /// - The configured name, or the code when no name was given
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named {
                name: Some(name), ..
            } => name,
            Self::Named { code, name: None } | Self::Code(code) => code,
        }
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::Code(code.to_string())
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self::Code(code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What: Collect the codes of a locale list in configured order.
#[must_use]
pub fn locale_codes(locales: &[Locale]) -> Vec<&str> {
    locales.iter().map(Locale::code).collect()
}

/// What: Find a configured locale by code.
#[must_use]
pub fn find_locale<'a>(locales: &'a [Locale], code: &str) -> Option<&'a Locale> {
    locales.iter().find(|l| l.code() == code)
}

/// What: Check whether `code` belongs to the configured locales.
#[must_use]
pub fn contains_locale(locales: &[Locale], code: &str) -> bool {
    find_locale(locales, code).is_some()
}

/// What: Remove duplicate codes from a locale list.
///
/// Inputs:
/// - `locales`: Configured locales, possibly with repeated codes
///
/// Output:
/// - Locales with the first occurrence of each code kept, order preserved
///
/// Details:
/// - Each dropped duplicate is logged as a configuration warning
#[must_use]
pub fn dedup_locales(locales: Vec<Locale>) -> Vec<Locale> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(locales.len());
    for locale in locales {
        if seen.insert(locale.code().to_string()) {
            unique.push(locale);
        } else {
            tracing::warn!(
                "Duplicate locale '{}' in configuration, keeping the first entry",
                locale.code()
            );
        }
    }
    unique
}

/// What: Validate locale code format.
///
/// Inputs:
/// - `locale`: Locale code to validate
///
/// Output:
/// - `true` if format looks valid, `false` otherwise
///
/// Details:
/// - Checks for basic structure: language[-region] or language[-script][-region]
/// - Allows simple language codes (e.g., "en") or full codes (e.g., "zh-TW")
/// - Rejects empty codes, spaces, special chars and dangling hyphens
#[must_use]
pub fn is_valid_locale_format(locale: &str) -> bool {
    if locale.is_empty() || locale.len() > 20 {
        return false;
    }

    locale.chars().all(|c| c.is_alphanumeric() || c == '-')
        && !locale.starts_with('-')
        && !locale.ends_with('-')
        && !locale.contains("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Both configuration shapes deserialize into `Locale`.
    ///
    /// Inputs:
    /// - A JSON list mixing bare codes and `{code, name}` objects
    ///
    /// Output:
    /// - Codes and names resolve; a missing name falls back to the code
    fn test_locale_deserialize_mixed() {
        let locales: Vec<Locale> = serde_json::from_str(
            r#"["en", {"code": "ja", "name": "日本語"}, {"code": "zh"}]"#,
        )
        .expect("locale list should parse");
        assert_eq!(locale_codes(&locales), vec!["en", "ja", "zh"]);
        assert_eq!(locales[0].name(), "en");
        assert_eq!(locales[1].name(), "日本語");
        assert_eq!(locales[2].name(), "zh");
    }

    #[test]
    fn test_find_and_contains() {
        let locales = vec![Locale::from("en"), Locale::named("zh-TW", "繁體中文")];
        assert_eq!(
            find_locale(&locales, "zh-TW").map(Locale::name),
            Some("繁體中文")
        );
        assert!(contains_locale(&locales, "en"));
        assert!(!contains_locale(&locales, "zh"));
    }

    #[test]
    fn test_dedup_locales_keeps_first() {
        let locales = vec![
            Locale::named("en", "English"),
            Locale::from("ja"),
            Locale::from("en"),
        ];
        let unique = dedup_locales(locales);
        assert_eq!(locale_codes(&unique), vec!["en", "ja"]);
        assert_eq!(unique[0].name(), "English");
    }

    #[test]
    fn test_is_valid_locale_format() {
        assert!(is_valid_locale_format("en"));
        assert!(is_valid_locale_format("zh-Hans-CN"));
        assert!(!is_valid_locale_format(""));
        assert!(!is_valid_locale_format("-en"));
        assert!(!is_valid_locale_format("en-"));
        assert!(!is_valid_locale_format("en--US"));
        assert!(!is_valid_locale_format("en US"));
        assert!(!is_valid_locale_format(&"x".repeat(21)));
    }
}
