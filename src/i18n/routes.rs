//! Locale-prefixed route generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DEFAULT_LOCALE;
use crate::i18n::locale::Locale;

/// Separator between locale and route name in generated names (`en___about`).
pub const ROUTE_NAME_SEPARATOR: &str = "___";

/// A page route descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Route path (e.g. "/about").
    pub path: String,
    /// Route name, if the page has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Opaque route data copied to every generated variant.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub meta: Value,
}

impl Page {
    /// What: Create an unnamed page.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            meta: Value::Null,
        }
    }

    /// What: Create a named page.
    #[must_use]
    pub fn named(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(path)
        }
    }

    /// What: Build this page's variant for one locale.
    ///
    /// Output:
    /// - Path `/{locale}` for the root page, `/{locale}{path}` otherwise;
    ///   name `{locale}___{name}` if the page is named; `meta` copied
    #[must_use]
    pub fn localized(&self, locale: &str) -> Self {
        Self {
            path: localized_route_path(locale, &self.path),
            name: self
                .name
                .as_ref()
                .map(|name| format!("{locale}{ROUTE_NAME_SEPARATOR}{name}")),
            meta: self.meta.clone(),
        }
    }
}

/// What: Prefix a route path with a locale.
///
/// Inputs:
/// - `locale`: Locale code
/// - `path`: Original route path
///
/// Output:
/// - `/{locale}` when `path` is exactly `/`, otherwise `/{locale}{path}`
#[must_use]
pub fn localized_route_path(locale: &str, path: &str) -> String {
    if path == "/" {
        format!("/{locale}")
    } else {
        format!("/{locale}{path}")
    }
}

/// What: Generate one page per (page, locale) pair.
///
/// Inputs:
/// - `pages`: Original pages, in table order
/// - `locales`: Configured locales; an empty list means `["en"]`
///
/// Output:
/// - Prefixed variants only, pages in the outer loop and locales in the
///   inner loop (locale varies fastest)
#[must_use]
pub fn prefix_routes(pages: &[Page], locales: &[Locale]) -> Vec<Page> {
    let fallback = [Locale::from(DEFAULT_LOCALE)];
    let locales = if locales.is_empty() { &fallback[..] } else { locales };

    pages
        .iter()
        .flat_map(|page| locales.iter().map(move |locale| page.localized(locale.code())))
        .collect()
}

/// What: Append the locale-prefixed variants to an existing route table.
///
/// Inputs:
/// - `pages`: Route table to extend; the original entries stay in place
/// - `locales`: Configured locales
///
/// Output:
/// - Number of routes appended
pub fn extend_pages(pages: &mut Vec<Page>, locales: &[Locale]) -> usize {
    let prefixed = prefix_routes(pages, locales);
    let added = prefixed.len();
    pages.extend(prefixed);
    tracing::debug!(added, total = pages.len(), "Extended route table with locale prefixes");
    added
}
