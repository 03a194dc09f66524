//! One-shot startup: options in, shared runtime configuration out.

use std::path::Path;
use std::sync::Arc;

use crate::config::{ModuleOptions, RuntimeConfig};
use crate::i18n::messages::collect_messages;
use crate::i18n::request::{RequestOutcome, handle_request_with};
use crate::i18n::resolver::LocaleResolver;
use crate::i18n::routes::{Page, extend_pages};
use crate::i18n::state::{I18n, LocaleState};

/// Result of [`setup`]: the shared configuration and what request handling needs.
#[derive(Debug, Clone)]
pub struct Setup {
    /// Shared read-only configuration.
    runtime: Arc<RuntimeConfig>,
    /// Resolver built from `runtime`.
    resolver: LocaleResolver,
}

/// What: Build the runtime configuration from module options.
///
/// Inputs:
/// - `options`: Module options
/// - `root_dir`: Project root; `config_file` and `locales_dir` are relative to it
///
/// Output:
/// - [`Setup`] holding the normalised runtime configuration
///
/// Details:
/// - Locale list and default locale are normalised first, so message
///   dictionaries exist for exactly the effective locales
/// - Messages: per-locale files, then the external file, then inline
///   messages (later wins); load failures are warnings
/// - Unsupported options are reported, never rejected
#[must_use]
pub fn setup(options: &ModuleOptions, root_dir: &Path) -> Setup {
    let base = RuntimeConfig {
        default_locale: options.default_locale.clone(),
        locales: options.locales.clone(),
        messages: crate::i18n::messages::MessagesByLocale::new(),
        strategy: options.strategy,
        detect_browser_language: options.detect_browser_language.clone(),
        debug: options.debug,
    }
    .normalized();

    let messages = collect_messages(options, root_dir, &base.locales);
    let runtime = RuntimeConfig { messages, ..base };
    runtime.warn_unsupported_options();

    tracing::info!(
        default_locale = %runtime.default_locale,
        locales = ?runtime.locale_codes(),
        "i18n runtime config ready"
    );

    Setup::from_runtime(runtime)
}

impl Setup {
    /// What: Wrap an already-built runtime configuration.
    #[must_use]
    pub fn from_runtime(runtime: RuntimeConfig) -> Self {
        let resolver = LocaleResolver::new(&runtime);
        Self {
            runtime: Arc::new(runtime),
            resolver,
        }
    }

    /// Shared runtime configuration.
    #[must_use]
    pub fn runtime(&self) -> Arc<RuntimeConfig> {
        Arc::clone(&self.runtime)
    }

    /// Locale resolver for this configuration.
    #[must_use]
    pub const fn resolver(&self) -> &LocaleResolver {
        &self.resolver
    }

    /// What: Append locale-prefixed variants of `pages` to the route table.
    ///
    /// Output:
    /// - Number of routes added
    pub fn extend_pages(&self, pages: &mut Vec<Page>) -> usize {
        extend_pages(pages, &self.runtime.locales)
    }

    /// What: Initialise a request and build its translation context.
    ///
    /// Inputs:
    /// - `path`: Request path
    /// - `accept_language`: `Accept-Language` header, if any
    ///
    /// Output:
    /// - The request outcome and an [`I18n`] context for rendering
    #[must_use]
    pub fn begin_request(&self, path: &str, accept_language: Option<&str>) -> (RequestOutcome, I18n) {
        let mut state = LocaleState::new();
        let outcome = handle_request_with(&self.resolver, path, accept_language, &mut state);
        let current_path = outcome.redirect.clone().unwrap_or_else(|| path.to_string());
        (outcome, I18n::new(self.runtime(), state, current_path))
    }
}
