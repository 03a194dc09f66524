//! Command-line route prefixing.

use std::process::ExitCode;

use i18n_code::Setup;
use i18n_code::i18n::{Page, prefix_routes};

use crate::args::utils::parse_page;

/// What: Print locale-prefixed routes as pretty JSON.
///
/// Inputs:
/// - `setup`: Runtime configuration
/// - `raw_pages`: `PATH` or `PATH:NAME` arguments
/// - `keep_original`: Also list the unprefixed routes first
///
/// Output:
/// - `SUCCESS`, or `FAILURE` if serialization fails
pub fn handle_routes(setup: &Setup, raw_pages: &[String], keep_original: bool) -> ExitCode {
    let pages: Vec<Page> = raw_pages.iter().map(|raw| parse_page(raw)).collect();

    let routes = if keep_original {
        let mut table = pages;
        setup.extend_pages(&mut table);
        table
    } else {
        prefix_routes(&pages, &setup.runtime().locales)
    };

    match serde_json::to_string_pretty(&routes) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize routes");
            eprintln!("Failed to serialize routes: {e}");
            ExitCode::FAILURE
        }
    }
}
