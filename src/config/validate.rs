//! Runtime configuration normalisation.
//!
//! Problems are logged and replaced with safe fallbacks; nothing here fails.

use crate::config::types::{DEFAULT_LOCALE, RedirectOn, RuntimeConfig, Strategy};
use crate::i18n::locale::{Locale, contains_locale, dedup_locales, is_valid_locale_format};

impl RuntimeConfig {
    /// What: Return a copy of this configuration with invariants restored.
    ///
    /// Output:
    /// - Configuration whose locale list is non-empty and duplicate-free and
    ///   whose `default_locale` belongs to that list
    ///
    /// Details:
    /// - Empty locale list -> `["en"]`
    /// - Duplicate codes -> first occurrence kept
    /// - `default_locale` outside the list -> first configured locale
    /// - Each substitution is logged with `tracing::warn!`
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.locales.is_empty() {
            tracing::warn!(
                "No locales configured, using default [\"{}\"]",
                DEFAULT_LOCALE
            );
            self.locales = vec![Locale::from(DEFAULT_LOCALE)];
        }

        self.locales = dedup_locales(self.locales);

        for locale in &self.locales {
            if !is_valid_locale_format(locale.code()) {
                tracing::warn!(
                    "Locale code '{}' does not look like a language tag; it will only match literally",
                    locale.code()
                );
            }
        }

        if !contains_locale(&self.locales, &self.default_locale)
            && let Some(first) = self.locales.first()
        {
            tracing::warn!(
                "defaultLocale \"{}\" not in locales, using first locale \"{}\"",
                self.default_locale,
                first.code()
            );
            self.default_locale = first.code().to_string();
        }

        self
    }

    /// What: Report options that are accepted but not acted upon.
    ///
    /// Details:
    /// - Non-prefix strategies are treated as `prefix`
    /// - Cookie persistence and redirect gating are not consulted by detection
    pub fn warn_unsupported_options(&self) {
        if self.strategy != Strategy::Prefix {
            tracing::warn!(
                strategy = ?self.strategy,
                "Only the 'prefix' strategy is implemented; routes will be prefixed for every locale"
            );
        }
        let detect = &self.detect_browser_language;
        if detect.use_cookie {
            tracing::warn!(
                cookie_key = %detect.cookie_key,
                "detectBrowserLanguage.useCookie is accepted but locale persistence is not implemented"
            );
        }
        if detect.redirect_on != RedirectOn::Root {
            tracing::warn!(
                redirect_on = ?detect.redirect_on,
                "detectBrowserLanguage.redirectOn is accepted but not consulted; unprefixed paths always redirect"
            );
        }
    }

    /// Locale codes in configured order.
    #[must_use]
    pub fn locale_codes(&self) -> Vec<&str> {
        crate::i18n::locale::locale_codes(&self.locales)
    }
}
