//! Library entry for i18n-code: locale resolution, message dictionaries,
//! translation and locale-prefixed routes.

pub mod config;
pub mod i18n;

pub use crate::config::{ModuleOptions, RuntimeConfig};
pub use crate::i18n::{I18n, Locale, LocaleState, Page, Setup, setup};
