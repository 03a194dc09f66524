//! Message trees: loading, merging and per-locale dictionaries.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::{ModuleOptions, find_with_stem, read_tree_file};
use crate::i18n::locale::{Locale, is_valid_locale_format};
use crate::i18n::merge::{deep_merge, merge_maps};

/// Nested translation dictionary; leaves are strings, branches are objects.
pub type MessageTree = Map<String, Value>;

/// Message trees keyed by locale code.
pub type MessagesByLocale = BTreeMap<String, MessageTree>;

/// What: Convert a tree whose top-level keys are locale codes into [`MessagesByLocale`].
///
/// Inputs:
/// - `tree`: Parsed file contents (e.g. `{en: {...}, zh: {...}}`)
///
/// Output:
/// - `Result<MessagesByLocale, String>`
///
/// # Errors
/// - Returns `Err` when the top level is not an object
///
/// Details:
/// - Top-level entries that are not objects are skipped with a warning
pub fn messages_from_value(tree: Value) -> Result<MessagesByLocale, String> {
    let Value::Object(top) = tree else {
        return Err("Messages must be a mapping from locale code to message tree".to_string());
    };

    let mut messages = MessagesByLocale::new();
    for (locale, value) in top {
        match value {
            Value::Object(dict) => {
                messages.insert(locale, dict);
            }
            other => {
                tracing::warn!(
                    "Ignoring messages for '{}': expected a mapping, found {}",
                    locale,
                    value_kind(&other)
                );
            }
        }
    }
    Ok(messages)
}

/// Short name of a JSON value's type for log messages.
const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// What: Load an external messages file keyed by locale.
///
/// Inputs:
/// - `path`: YAML/TOML/JSON file
///
/// Output:
/// - `Result<MessagesByLocale, String>`
///
/// # Errors
/// - Returns `Err` when the file cannot be read or parsed, or its top level
///   is not a mapping
pub fn load_messages_file(path: &Path) -> Result<MessagesByLocale, String> {
    let tree = read_tree_file(path)?;
    let messages = messages_from_value(tree).map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        locales = messages.len(),
        "Loaded messages file"
    );
    Ok(messages)
}

/// What: Deep-merge two [`MessagesByLocale`] values.
///
/// Inputs:
/// - `base`: Lower-precedence messages
/// - `overlay`: Higher-precedence messages
///
/// Output:
/// - Per-locale deep merge; locales present in only one side are kept
#[must_use]
pub fn merge_messages(base: MessagesByLocale, overlay: MessagesByLocale) -> MessagesByLocale {
    let mut merged = base;
    for (locale, tree) in overlay {
        let existing = merged.remove(&locale).unwrap_or_default();
        merged.insert(locale, merge_maps(existing, tree));
    }
    merged
}

/// What: Build one dictionary per configured locale.
///
/// Inputs:
/// - `resolved`: All available messages
/// - `locales`: Configured locales
///
/// Output:
/// - Exactly one entry per configured locale; locales without messages get
///   an empty dictionary and messages for unconfigured locales are dropped
#[must_use]
pub fn build_store(resolved: &MessagesByLocale, locales: &[Locale]) -> MessagesByLocale {
    let mut store = MessagesByLocale::new();
    for locale in locales {
        let code = locale.code();
        let dict = match resolved.get(code) {
            Some(tree) => match deep_merge(Value::Object(Map::new()), Value::Object(tree.clone())) {
                Value::Object(map) => map,
                _ => MessageTree::new(),
            },
            None => {
                tracing::debug!("No messages for locale '{}', using an empty dictionary", code);
                MessageTree::new()
            }
        };
        store.insert(code.to_string(), dict);
    }
    for code in resolved.keys() {
        if !store.contains_key(code) {
            tracing::debug!("Dropping messages for unconfigured locale '{}'", code);
        }
    }
    store
}

/// What: Collect the messages for setup from every configured source.
///
/// Inputs:
/// - `options`: Module options
/// - `root_dir`: Directory relative paths are resolved against
///
/// Output:
/// - Per-locale dictionaries for every configured locale
///
/// Details:
/// - Precedence, lowest first: per-locale files in `locales_dir`, the
///   external `config_file`, inline messages (or the factory result)
/// - Load failures are logged as warnings and the source is skipped
#[must_use]
pub fn collect_messages(options: &ModuleOptions, root_dir: &Path, locales: &[Locale]) -> MessagesByLocale {
    let mut messages = MessagesByLocale::new();

    if let Some(dir) = &options.locales_dir {
        let mut loader = MessageLoader::new(root_dir.join(dir));
        for locale in locales {
            if let Ok(tree) = loader.load(locale.code()) {
                messages.insert(locale.code().to_string(), tree);
            }
        }
    }

    if let Some(file) = &options.config_file {
        let path = root_dir.join(file);
        match load_messages_file(&path) {
            Ok(from_file) => messages = merge_messages(messages, from_file),
            Err(e) => {
                tracing::warn!("Failed to load config file: {}: {}", path.display(), e);
            }
        }
    }

    messages = merge_messages(messages, options.messages.resolve());
    build_store(&messages, locales)
}

/// Loader for per-locale message files that caches loaded trees.
pub struct MessageLoader {
    /// Directory holding `{code}.{ext}` files.
    locales_dir: PathBuf,
    /// Trees already loaded, by locale code.
    cache: HashMap<String, MessageTree>,
}

impl MessageLoader {
    /// What: Create a new `MessageLoader`.
    ///
    /// Inputs:
    /// - `locales_dir`: Path to locales directory
    #[must_use]
    pub fn new(locales_dir: PathBuf) -> Self {
        Self {
            locales_dir,
            cache: HashMap::new(),
        }
    }

    /// What: Load a locale's message file, using the cache if available.
    ///
    /// Inputs:
    /// - `locale`: Locale code to load
    ///
    /// Output:
    /// - `Result<MessageTree, String>` containing the locale's messages
    ///
    /// # Errors
    /// - Returns `Err` when the code is not a valid locale code
    /// - Returns `Err` when no `{locale}.{yml,yaml,toml,json}` file exists
    /// - Returns `Err` when the file cannot be read or parsed, or is not a mapping
    ///
    /// Details:
    /// - A file may either hold the tree directly or wrap it in a single
    ///   top-level key equal to the locale code
    /// - Failures are logged at warn level
    pub fn load(&mut self, locale: &str) -> Result<MessageTree, String> {
        if let Some(tree) = self.cache.get(locale) {
            return Ok(tree.clone());
        }

        match self.load_uncached(locale) {
            Ok(tree) => {
                tracing::debug!("Loaded locale '{}' with {} top-level keys", locale, tree.len());
                self.cache.insert(locale.to_string(), tree.clone());
                Ok(tree)
            }
            Err(e) => {
                tracing::warn!("Failed to load locale '{}': {}", locale, e);
                Err(e)
            }
        }
    }

    /// Read and unwrap a locale file without touching the cache.
    fn load_uncached(&self, locale: &str) -> Result<MessageTree, String> {
        if !is_valid_locale_format(locale) {
            return Err(format!(
                "Invalid locale code format: '{locale}'. Expected format: language[-region] (e.g., 'en', 'zh-TW')"
            ));
        }

        let path = find_with_stem(&self.locales_dir, locale).ok_or_else(|| {
            format!(
                "Locale file not found for '{locale}' in {}",
                self.locales_dir.display()
            )
        })?;

        match read_tree_file(&path)? {
            Value::Object(mut map) => {
                let wrapped = map.len() == 1 && map.get(locale).is_some_and(Value::is_object);
                if wrapped && let Some(Value::Object(inner)) = map.remove(locale) {
                    return Ok(inner);
                }
                Ok(map)
            }
            _ => Err(format!("{} does not contain a mapping", path.display())),
        }
    }

    /// What: Get locales directory path.
    #[must_use]
    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }
}
