//! Per-request locale initialisation.

use crate::config::RuntimeConfig;
use crate::i18n::resolver::LocaleResolver;
use crate::i18n::routes::localized_route_path;
use crate::i18n::state::LocaleState;

/// Where the request's locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    /// The path carried a locale prefix.
    Path,
    /// Detected from `Accept-Language` (or the default locale).
    Header,
}

/// Result of initialising the locale for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    /// Locale stored in the request's state.
    pub locale: String,
    /// How the locale was found.
    pub source: LocaleSource,
    /// Locale-prefixed path to redirect to (replacing the current entry), if any.
    pub redirect: Option<String>,
}

/// What: Initialise the locale state for an incoming request.
///
/// Inputs:
/// - `path`: Request path
/// - `accept_language`: `Accept-Language` header, if any
/// - `config`: Runtime configuration
/// - `state`: This request's locale state (written)
///
/// Output:
/// - [`RequestOutcome`] with the chosen locale and an optional redirect
///
/// Details:
/// - A locale-prefixed path is authoritative and never redirects
/// - Otherwise the detected locale is stored and the request is redirected
///   to `/{locale}` (root) or `/{locale}{path}`
/// - Performing the redirect is the caller's job; a failed navigation is
///   not retried here
pub fn handle_request(
    path: &str,
    accept_language: Option<&str>,
    config: &RuntimeConfig,
    state: &mut LocaleState,
) -> RequestOutcome {
    let resolver = LocaleResolver::new(config);
    handle_request_with(&resolver, path, accept_language, state)
}

/// What: Same as [`handle_request`] with a prebuilt resolver.
pub fn handle_request_with(
    resolver: &LocaleResolver,
    path: &str,
    accept_language: Option<&str>,
    state: &mut LocaleState,
) -> RequestOutcome {
    if let Some(locale) = resolver.from_path(path) {
        tracing::debug!(path, locale = %locale, "locale parsed from path");
        state.set(locale.clone());
        return RequestOutcome {
            locale,
            source: LocaleSource::Path,
            redirect: None,
        };
    }

    let detected = resolver.from_header(accept_language);
    let target = localized_route_path(&detected, path);
    tracing::debug!(
        path,
        locale = %detected,
        redirect = %target,
        "locale detected, redirecting to prefixed path"
    );
    state.set(detected.clone());
    RequestOutcome {
        locale: detected,
        source: LocaleSource::Header,
        redirect: Some(target),
    }
}
