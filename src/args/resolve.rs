//! Command-line locale resolution.

use std::process::ExitCode;

use i18n_code::Setup;
use i18n_code::i18n::LocaleSource;

/// What: Resolve and print the locale for a request.
///
/// Inputs:
/// - `setup`: Runtime configuration
/// - `path`: Request path
/// - `accept_language`: `Accept-Language` header value, if given
///
/// Output:
/// - Prints the locale on the first line and, when the request would be
///   redirected, `redirect: {path}` on the second
pub fn handle_resolve(setup: &Setup, path: &str, accept_language: Option<&str>) -> ExitCode {
    tracing::info!(path, accept_language, "Resolve requested from CLI");
    let (outcome, _ctx) = setup.begin_request(path, accept_language);

    println!("{}", outcome.locale);
    if let Some(redirect) = &outcome.redirect {
        println!("redirect: {redirect}");
    }
    let source = match outcome.source {
        LocaleSource::Path => "path",
        LocaleSource::Header => "header",
    };
    tracing::debug!(locale = %outcome.locale, source, "resolved locale");
    ExitCode::SUCCESS
}
