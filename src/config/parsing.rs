//! Reading configuration and message files in YAML, TOML or JSON.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::types::ModuleOptions;

/// Supported file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.yml` / `.yaml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl FileFormat {
    /// Extensions tried, in order, when probing for a file by stem.
    pub const EXTENSIONS: [&'static str; 4] = ["yml", "yaml", "toml", "json"];

    /// What: Pick the format from a path's extension.
    ///
    /// Output:
    /// - `None` for missing or unknown extensions
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// What: Parse file contents into a JSON-like tree.
///
/// Inputs:
/// - `contents`: Raw file text
/// - `format`: Format to parse as
///
/// Output:
/// - `Result<Value, String>` with the parsed tree or a parse error message
///
/// # Errors
/// - Returns `Err` when the text is not valid for `format`
pub fn parse_tree(contents: &str, format: FileFormat) -> Result<Value, String> {
    match format {
        FileFormat::Yaml => {
            serde_norway::from_str(contents).map_err(|e| format!("Failed to parse YAML: {e}"))
        }
        FileFormat::Toml => toml::from_str(contents).map_err(|e| format!("Failed to parse TOML: {e}")),
        FileFormat::Json => {
            serde_json::from_str(contents).map_err(|e| format!("Failed to parse JSON: {e}"))
        }
    }
}

/// What: Read a YAML/TOML/JSON file into a tree.
///
/// Inputs:
/// - `path`: File to read
///
/// Output:
/// - `Result<Value, String>` containing the tree or an error message
///
/// # Errors
/// - Returns `Err` when the extension is not supported
/// - Returns `Err` when the file does not exist or cannot be read
/// - Returns `Err` when the file is empty
/// - Returns `Err` when the content cannot be parsed
pub fn read_tree_file(path: &Path) -> Result<Value, String> {
    let format = FileFormat::from_path(path).ok_or_else(|| {
        format!(
            "Unsupported file extension: {}. Expected .yml, .yaml, .toml or .json",
            path.display()
        )
    })?;

    if !path.exists() {
        return Err(format!("File not found: {}", path.display()));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("File is empty: {}", path.display()));
    }

    parse_tree(&contents, format).map_err(|e| format!("{}: {e}", path.display()))
}

/// What: Load [`ModuleOptions`] from a configuration file.
///
/// Inputs:
/// - `path`: Configuration file (`i18n.yml`, `i18n.toml`, `i18n.json`, ...)
///
/// Output:
/// - Parsed options; missing keys take their defaults
///
/// # Errors
/// - Returns `Err` when the file cannot be read or parsed (see [`read_tree_file`])
/// - Returns `Err` when the tree does not match the options schema
pub fn load_options(path: &Path) -> Result<ModuleOptions, String> {
    let tree = read_tree_file(path)?;
    let options: ModuleOptions = serde_json::from_value(tree)
        .map_err(|e| format!("Invalid configuration in {}: {e}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        locales = options.locales.len(),
        "Loaded i18n options"
    );
    Ok(options)
}
