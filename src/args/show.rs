//! Command-line display of the effective configuration.

use std::process::ExitCode;

use i18n_code::Setup;

/// What: Print the effective runtime configuration as pretty JSON.
///
/// Output:
/// - `SUCCESS`, or `FAILURE` if serialization fails
pub fn handle_show_config(setup: &Setup) -> ExitCode {
    match serde_json::to_string_pretty(&*setup.runtime()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize runtime config");
            eprintln!("Failed to serialize runtime config: {e}");
            ExitCode::FAILURE
        }
    }
}
