//! Shared utilities for argument processing.

use std::path::{Path, PathBuf};

use i18n_code::config::{ModuleOptions, find_config_file, load_options};
use i18n_code::i18n::{Page, TranslationParams};

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `config_debug`: `debug` flag from the configuration file.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag and `debug: true` override `log_level`.
/// - `I18N_CODE_TRACE=1` enables TRACE level.
pub fn determine_log_level(args: &crate::args::Args, config_debug: bool) -> String {
    if std::env::var("I18N_CODE_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else if args.verbose || config_debug {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// Options loaded for the CLI, plus where they came from.
pub struct LoadedOptions {
    /// Parsed options (defaults when no file was found).
    pub options: ModuleOptions,
    /// Directory relative config paths are resolved against.
    pub root_dir: PathBuf,
    /// File the options came from, if any.
    pub source: Option<PathBuf>,
}

/// What: Locate and load the configuration for the CLI.
///
/// Inputs:
/// - `explicit`: `--config` value, if given
///
/// Output:
/// - `Result<LoadedOptions, String>`
///
/// # Errors
/// - Returns `Err` when a configuration file was found or given but cannot be
///   read or parsed
///
/// Details:
/// - Without any file, default options are used and the current directory is
///   the root
pub fn load_cli_options(explicit: Option<&Path>) -> Result<LoadedOptions, String> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let Some(path) = find_config_file(explicit) else {
        return Ok(LoadedOptions {
            options: ModuleOptions::default(),
            root_dir: cwd,
            source: None,
        });
    };

    let options = load_options(&path)?;
    let root_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or(cwd, Path::to_path_buf);
    Ok(LoadedOptions {
        options,
        root_dir,
        source: Some(path),
    })
}

/// What: Parse `NAME=VALUE` pairs into translation parameters.
///
/// Output:
/// - Parameters map; entries without `=` are skipped with a warning
pub fn parse_params(raw: &[String]) -> TranslationParams {
    let mut params = TranslationParams::new();
    for entry in raw {
        if let Some((name, value)) = entry.split_once('=') {
            params.insert(name.trim().to_string(), value.to_string());
        } else {
            tracing::warn!(param = %entry, "Ignoring parameter without '=': expected NAME=VALUE");
        }
    }
    params
}

/// What: Parse a `PATH` or `PATH:NAME` page argument.
pub fn parse_page(raw: &str) -> Page {
    match raw.split_once(':') {
        Some((path, name)) if !name.is_empty() => Page::named(path, name),
        Some((path, _)) => Page::new(path),
        None => Page::new(raw),
    }
}
