//! Internationalization (i18n) for web applications.
//!
//! This module provides request locale resolution, message dictionaries,
//! translation lookup and locale-prefixed route generation.
//!
//! # Overview
//!
//! The i18n system supports:
//! - **Locale Resolution**: A `/{locale}` path prefix wins; otherwise the
//!   `Accept-Language` header is matched against the configured locales;
//!   otherwise the default locale is used
//! - **Message Store**: Per-locale message trees merged from per-locale files,
//!   an external messages file and inline messages
//! - **Translation Lookup**: `t()` / `t_with()` on the [`I18n`] context, with
//!   dotted keys and `{placeholder}` interpolation
//! - **Route Prefixing**: One route per (page, locale) pair
//!
//! # Message Files
//!
//! Messages are nested trees accessed with dot-notation keys:
//!
//! ```yaml
//! en:
//!   home:
//!     header:
//!       notify: "You have {count} messages"
//! ```
//!
//! This becomes accessible as `home.header.notify`.
//!
//! # Usage
//!
//! ```rust
//! use std::path::Path;
//! use i18n_code::config::ModuleOptions;
//! use i18n_code::i18n::{self, Locale, Page};
//!
//! let options = ModuleOptions {
//!     default_locale: "en".to_string(),
//!     locales: vec![Locale::from("en"), Locale::from("zh")],
//!     ..ModuleOptions::default()
//! };
//! let setup = i18n::setup(&options, Path::new("."));
//!
//! let mut pages = vec![Page::new("/")];
//! setup.extend_pages(&mut pages);
//! assert_eq!(pages.len(), 3);
//!
//! let (outcome, ctx) = setup.begin_request("/zh/about", None);
//! assert_eq!(outcome.locale, "zh");
//! assert_eq!(ctx.t("missing.key"), "missing.key");
//! ```
//!
//! # Error Handling
//!
//! - Missing locale dictionaries fall back to English, then to the key itself
//! - A missing or invalid messages file is logged and skipped
//! - Configuration problems (no locales, default locale not configured,
//!   unknown locale passed to `set_locale`) are logged and replaced with a
//!   safe fallback
//! - Nothing here panics or aborts navigation

pub mod detection;
pub mod locale;
pub mod merge;
pub mod messages;
pub mod request;
pub mod resolver;
pub mod routes;
pub mod setup;
pub mod state;
pub mod translations;

pub use detection::{detect_locale, locale_variants, parse_locale_from_path, resolve_locale};
pub use locale::Locale;
pub use merge::{deep_merge, deep_merge_all};
pub use messages::{MessageLoader, MessageTree, MessagesByLocale, load_messages_file};
pub use request::{LocaleSource, RequestOutcome, handle_request};
pub use resolver::LocaleResolver;
pub use routes::{Page, extend_pages, prefix_routes};
pub use setup::{Setup, setup};
pub use state::{I18n, LocaleState};
pub use translations::{TranslationParams, interpolate, lookup, translate};
