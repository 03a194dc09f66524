//! Command-line translation lookup.

use std::process::ExitCode;

use i18n_code::Setup;
use i18n_code::i18n::translate;

use crate::args::utils::parse_params;

/// What: Translate a key and print the result.
///
/// Inputs:
/// - `setup`: Runtime configuration
/// - `key`: Dot-notation key
/// - `locale`: Locale to use; the configured default when `None`
/// - `raw_params`: `NAME=VALUE` placeholder values
///
/// Output:
/// - Prints the translation (or the key itself when missing)
///
/// Details:
/// - An unconfigured `locale` is warned about and looked up anyway, which
///   falls back to the English dictionary
pub fn handle_translate(
    setup: &Setup,
    key: &str,
    locale: Option<&str>,
    raw_params: &[String],
) -> ExitCode {
    let runtime = setup.runtime();
    let locale = locale.unwrap_or(runtime.default_locale.as_str());
    if !runtime.locale_codes().contains(&locale) {
        tracing::warn!(
            "Locale \"{}\" is not in available locales: {:?}",
            locale,
            runtime.locale_codes()
        );
    }

    let params = (!raw_params.is_empty()).then(|| parse_params(raw_params));
    println!(
        "{}",
        translate(key, &runtime.messages, locale, params.as_ref())
    );
    ExitCode::SUCCESS
}
