//! Locale resolution against a cached runtime configuration.

use crate::config::RuntimeConfig;
use crate::i18n::detection::{detect_locale, parse_locale_from_path};
use crate::i18n::locale::Locale;

/// Locale resolver that caches configuration.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    /// Configured locales, in priority order.
    locales: Vec<Locale>,
    /// Fallback when neither path nor header decide.
    default_locale: String,
    /// Trace every decision at debug level.
    debug: bool,
}

impl LocaleResolver {
    /// What: Create a new `LocaleResolver` from a runtime configuration.
    ///
    /// Inputs:
    /// - `config`: Runtime configuration (normally already normalised)
    #[must_use]
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            locales: config.locales.clone(),
            default_locale: config.default_locale.clone(),
            debug: config.debug,
        }
    }

    /// What: Locale carried by the request path, if any.
    #[must_use]
    pub fn from_path(&self, path: &str) -> Option<String> {
        parse_locale_from_path(path, &self.locales).map(str::to_string)
    }

    /// What: Locale detected from the `Accept-Language` header, or the default.
    #[must_use]
    pub fn from_header(&self, accept_language: Option<&str>) -> String {
        detect_locale(accept_language, &self.locales, &self.default_locale)
    }

    /// What: Resolve the active locale for a request.
    ///
    /// Inputs:
    /// - `path`: Request path
    /// - `accept_language`: `Accept-Language` header, if any
    ///
    /// Output:
    /// - Path locale if present, otherwise the header-detected locale, otherwise
    ///   the default locale
    #[must_use]
    pub fn resolve(&self, path: &str, accept_language: Option<&str>) -> String {
        if let Some(locale) = self.from_path(path) {
            if self.debug {
                tracing::debug!(path, locale = %locale, "parsed from path");
            }
            return locale;
        }
        let detected = self.from_header(accept_language);
        if self.debug {
            tracing::debug!(
                path,
                accept_language = accept_language.unwrap_or("<none>"),
                locale = %detected,
                "detected from header"
            );
        }
        detected
    }

    /// Default locale.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Configured locales.
    #[must_use]
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }
}
