//! Configuration type definitions.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::i18n::locale::Locale;
use crate::i18n::messages::MessagesByLocale;

/// Default locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Cookie name declared for browser-language persistence.
pub const DEFAULT_COOKIE_KEY: &str = "i18n_redirected";

/// Routing strategy.
///
/// Only [`Strategy::Prefix`] changes behaviour; the other variants are
/// accepted and reported at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every route gets a `/{locale}` prefix.
    #[default]
    Prefix,
    /// Every route except the default locale's gets a prefix.
    PrefixExceptDefault,
    /// Routes are never prefixed.
    NoPrefix,
}

/// When a detected browser language should trigger a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectOn {
    /// Only on the site root.
    #[default]
    Root,
    /// On every route.
    All,
    /// Never.
    NoRedirect,
}

/// Browser language detection options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectBrowserLanguage {
    /// Persist the detected locale in a cookie.
    pub use_cookie: bool,
    /// Cookie name.
    pub cookie_key: String,
    /// Redirect policy.
    pub redirect_on: RedirectOn,
}

impl Default for DetectBrowserLanguage {
    fn default() -> Self {
        Self {
            use_cookie: false,
            cookie_key: DEFAULT_COOKIE_KEY.to_string(),
            redirect_on: RedirectOn::Root,
        }
    }
}

/// Closure producing messages at setup time.
pub type MessagesFactory = Arc<dyn Fn() -> MessagesByLocale + Send + Sync>;

/// Where inline messages come from: a literal tree or a factory evaluated once at setup.
#[derive(Clone)]
pub enum MessagesSource {
    /// Messages given directly.
    Inline(MessagesByLocale),
    /// Messages produced by a closure.
    Factory(MessagesFactory),
}

impl MessagesSource {
    /// What: Build a factory source from a closure.
    #[must_use]
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn() -> MessagesByLocale + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(f))
    }

    /// What: Produce the messages, evaluating the factory if there is one.
    #[must_use]
    pub fn resolve(&self) -> MessagesByLocale {
        match self {
            Self::Inline(messages) => messages.clone(),
            Self::Factory(factory) => factory(),
        }
    }
}

impl Default for MessagesSource {
    fn default() -> Self {
        Self::Inline(MessagesByLocale::new())
    }
}

impl fmt::Debug for MessagesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(messages) => f.debug_tuple("Inline").field(messages).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for MessagesSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        MessagesByLocale::deserialize(deserializer).map(Self::Inline)
    }
}

/// Setup-time options, as read from a configuration file or built in code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleOptions {
    /// Locale used when detection finds nothing.
    pub default_locale: String,
    /// Configured locales, in priority order.
    pub locales: Vec<Locale>,
    /// Inline messages (highest precedence).
    pub messages: MessagesSource,
    /// External messages file, relative to the project root.
    pub config_file: Option<PathBuf>,
    /// Directory of per-locale message files (`{code}.yml`, `.yaml`, `.toml` or `.json`).
    pub locales_dir: Option<PathBuf>,
    /// Routing strategy.
    pub strategy: Strategy,
    /// Browser language detection options.
    pub detect_browser_language: DetectBrowserLanguage,
    /// Enable verbose tracing of locale decisions.
    pub debug: bool,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            locales: Vec::new(),
            messages: MessagesSource::default(),
            config_file: None,
            locales_dir: None,
            strategy: Strategy::Prefix,
            detect_browser_language: DetectBrowserLanguage::default(),
            debug: false,
        }
    }
}

/// Process-wide runtime configuration, built once at setup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeConfig {
    /// Locale used when detection finds nothing.
    pub default_locale: String,
    /// Configured locales, in priority order.
    pub locales: Vec<Locale>,
    /// Per-locale message dictionaries.
    pub messages: MessagesByLocale,
    /// Routing strategy.
    pub strategy: Strategy,
    /// Browser language detection options.
    pub detect_browser_language: DetectBrowserLanguage,
    /// Enable verbose tracing of locale decisions.
    pub debug: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            locales: vec![Locale::from(DEFAULT_LOCALE)],
            messages: MessagesByLocale::new(),
            strategy: Strategy::Prefix,
            detect_browser_language: DetectBrowserLanguage::default(),
            debug: false,
        }
    }
}
