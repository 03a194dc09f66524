//! Per-request / per-session locale state and the translation context built on it.

use std::sync::Arc;

use crate::config::RuntimeConfig;
use crate::i18n::locale::{Locale, contains_locale};
use crate::i18n::translations::{TranslationParams, translate};

/// Active locale for one request or session.
///
/// Unset until the first write; reads fall back to the configured default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleState {
    /// Explicitly chosen locale, if any.
    current: Option<String>,
}

impl LocaleState {
    /// What: Create an unset state.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// What: Current locale, or `default_locale` when nothing was set yet.
    #[must_use]
    pub fn get<'a>(&'a self, default_locale: &'a str) -> &'a str {
        self.current.as_deref().unwrap_or(default_locale)
    }

    /// What: Set the current locale.
    pub fn set(&mut self, locale: impl Into<String>) {
        self.current = Some(locale.into());
    }

    /// Whether a locale was set explicitly.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.current.is_some()
    }
}

/// Translation context for UI code: shared configuration plus this request's state.
#[derive(Debug, Clone)]
pub struct I18n {
    /// Shared read-only configuration.
    config: Arc<RuntimeConfig>,
    /// This request's / session's locale.
    state: LocaleState,
    /// Path of the current route.
    current_path: String,
}

impl I18n {
    /// What: Create a context.
    ///
    /// Inputs:
    /// - `config`: Shared runtime configuration
    /// - `state`: Locale state for this request or session
    /// - `current_path`: Path of the current route
    #[must_use]
    pub fn new(config: Arc<RuntimeConfig>, state: LocaleState, current_path: impl Into<String>) -> Self {
        Self {
            config,
            state,
            current_path: current_path.into(),
        }
    }

    /// Active locale code.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.state.get(&self.config.default_locale)
    }

    /// Shared runtime configuration.
    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Configured locales.
    #[must_use]
    pub fn available_locales(&self) -> &[Locale] {
        &self.config.locales
    }

    /// Path of the current route.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// What: Record that the host navigated to `path`.
    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    /// What: Translate a key in the active locale.
    ///
    /// Output:
    /// - The message, or the key itself when missing
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        translate(key, &self.config.messages, self.locale(), None)
    }

    /// What: Translate a key and fill `{placeholder}`s from `params`.
    #[must_use]
    pub fn t_with(&self, key: &str, params: &TranslationParams) -> String {
        translate(key, &self.config.messages, self.locale(), Some(params))
    }

    /// What: Switch the active locale.
    ///
    /// Inputs:
    /// - `locale`: Target locale code
    ///
    /// Output:
    /// - `Some(path)` to navigate to when the locale-switched path differs
    ///   from the current one, `None` otherwise
    ///
    /// Details:
    /// - An unconfigured locale is logged as a warning and leaves the state
    ///   unchanged
    /// - Navigation itself is left to the caller
    pub fn set_locale(&mut self, locale: &str) -> Option<String> {
        if !contains_locale(&self.config.locales, locale) {
            tracing::warn!(
                "Locale \"{}\" is not in available locales: {:?}",
                locale,
                self.config.locale_codes()
            );
            return None;
        }

        self.state.set(locale);
        let target = self.switch_locale_path(locale);
        (target != self.current_path).then_some(target)
    }

    /// What: Prefix a path with the active locale.
    ///
    /// Output:
    /// - `/{locale}{path}` for absolute paths, `/{locale}/{path}` otherwise
    #[must_use]
    pub fn locale_path(&self, path: &str) -> String {
        let locale = self.locale();
        if path.starts_with('/') {
            format!("/{locale}{path}")
        } else {
            format!("/{locale}/{path}")
        }
    }

    /// What: The current path re-prefixed with another locale.
    ///
    /// Inputs:
    /// - `target`: Locale code to switch to
    ///
    /// Output:
    /// - Current path with its first configured locale prefix removed (an
    ///   empty remainder becomes `/`), prefixed with `/{target}`
    ///
    /// Details:
    /// - Only a whole leading segment counts as a locale prefix, so
    ///   `/english` keeps its first segment
    #[must_use]
    pub fn switch_locale_path(&self, target: &str) -> String {
        let path = self.current_path.as_str();
        let stripped = self
            .config
            .locales
            .iter()
            .find_map(|locale| {
                let rest = path.strip_prefix('/')?.strip_prefix(locale.code())?;
                (rest.is_empty() || rest.starts_with('/')).then_some(rest)
            })
            .map_or(path, |rest| if rest.is_empty() { "/" } else { rest });

        if stripped.starts_with('/') {
            format!("/{target}{stripped}")
        } else {
            format!("/{target}/{stripped}")
        }
    }

    /// What: Give back the locale state, e.g. to persist it in a session.
    #[must_use]
    pub fn into_state(self) -> LocaleState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::messages::messages_from_value;
    use serde_json::json;

    fn config() -> Arc<RuntimeConfig> {
        Arc::new(RuntimeConfig {
            default_locale: "en".to_string(),
            locales: vec![Locale::named("en", "English"), Locale::named("zh", "中文")],
            messages: messages_from_value(json!({
                "en": {"hello": "Hello", "welcome": "Welcome to {appName}"},
                "zh": {"hello": "你好", "welcome": "欢迎来到 {appName}"},
            }))
            .expect("test messages should be a mapping"),
            ..RuntimeConfig::default()
        })
    }

    #[test]
    fn test_locale_state_lazy_default() {
        let mut state = LocaleState::new();
        assert!(!state.is_set());
        assert_eq!(state.get("ja"), "ja");
        state.set("zh");
        assert!(state.is_set());
        assert_eq!(state.get("ja"), "zh");
    }

    #[test]
    fn test_t_follows_state() {
        let mut i18n = I18n::new(config(), LocaleState::new(), "/en");
        assert_eq!(i18n.t("hello"), "Hello");
        i18n.set_locale("zh");
        assert_eq!(i18n.t("hello"), "你好");
        let params: TranslationParams = [("appName".to_string(), "Foo".to_string())].into();
        assert_eq!(i18n.t_with("welcome", &params), "欢迎来到 Foo");
    }

    #[test]
    /// What: Switching to an unknown locale is rejected without side effects.
    fn test_set_locale_unknown() {
        let mut i18n = I18n::new(config(), LocaleState::new(), "/en/about");
        assert_eq!(i18n.set_locale("fr"), None);
        assert_eq!(i18n.locale(), "en");
    }

    #[test]
    fn test_set_locale_returns_navigation_target() {
        let mut i18n = I18n::new(config(), LocaleState::new(), "/en/about");
        assert_eq!(i18n.set_locale("zh"), Some("/zh/about".to_string()));
        assert_eq!(i18n.locale(), "zh");

        let mut same = I18n::new(config(), LocaleState::new(), "/en/about");
        assert_eq!(same.set_locale("en"), None);
    }

    #[test]
    fn test_locale_path() {
        let i18n = I18n::new(config(), LocaleState::new(), "/");
        assert_eq!(i18n.locale_path("/about"), "/en/about");
        assert_eq!(i18n.locale_path("about"), "/en/about");
        assert_eq!(i18n.locale_path("/"), "/en/");
    }

    #[test]
    fn test_switch_locale_path() {
        let at = |path: &str| I18n::new(config(), LocaleState::new(), path);
        assert_eq!(at("/en/about").switch_locale_path("zh"), "/zh/about");
        assert_eq!(at("/en").switch_locale_path("zh"), "/zh/");
        assert_eq!(at("/about").switch_locale_path("zh"), "/zh/about");
        assert_eq!(at("/english").switch_locale_path("zh"), "/zh/english");
        assert_eq!(at("").switch_locale_path("zh"), "/zh/");
    }

    #[test]
    fn test_available_locales_and_into_state() {
        let mut i18n = I18n::new(config(), LocaleState::new(), "/en");
        assert_eq!(i18n.available_locales().len(), 2);
        assert_eq!(i18n.available_locales()[1].name(), "中文");
        i18n.set_locale("zh");
        i18n.set_current_path("/zh");
        assert_eq!(i18n.current_path(), "/zh");
        assert_eq!(i18n.into_state().get("en"), "zh");
    }
}
