use std::env;
use std::path::{Path, PathBuf};

use crate::config::parsing::FileFormat;

/// Application directory name under the XDG config home.
pub const APP_DIR: &str = "i18n-code";

/// Configuration file stem (`i18n.yml`, `i18n.toml`, ...).
pub const CONFIG_STEM: &str = "i18n";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// User configuration directory (`$XDG_CONFIG_HOME/i18n-code`).
#[must_use]
pub fn config_dir() -> PathBuf {
    xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR)
}

/// What: Find a file named `{stem}.{ext}` in `dir` for any supported extension.
///
/// Output:
/// - First existing candidate in [`FileFormat::EXTENSIONS`] order
#[must_use]
pub fn find_with_stem(dir: &Path, stem: &str) -> Option<PathBuf> {
    FileFormat::EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|p| p.is_file())
}

/// What: Locate the configuration file.
///
/// Inputs:
/// - `explicit`: Path given on the command line, if any
///
/// Output:
/// - `Some(PathBuf)` for the first candidate found, or `None`
///
/// Details:
/// - An explicit path is returned as-is, even if it does not exist, so the
///   caller can report it
/// - Otherwise tries the current directory, then [`config_dir`]
#[must_use]
pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_with_stem(&cwd, CONFIG_STEM).or_else(|| find_with_stem(&config_dir(), CONFIG_STEM))
}
