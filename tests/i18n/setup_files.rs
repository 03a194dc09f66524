//! Integration tests for setup from configuration and message files.
//!
//! Tests cover:
//! - The sample configuration under `config/`
//! - Message precedence across per-locale files, the messages file and inline messages
//! - Recovery from missing or invalid files

use std::fs;
use std::path::{Path, PathBuf};

use i18n_code::config::{Strategy, load_options};
use i18n_code::setup;
use serde_json::json;
use tempfile::TempDir;

/// What: Path of the sample configuration shipped with the crate.
fn sample_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("i18n.yml")
}

#[test]
/// What: The sample configuration loads and merges all message sources.
///
/// Inputs:
/// - `config/i18n.yml` with `localesDir`, `configFile` and inline messages
///
/// Output:
/// - Inline `en.welcome` wins, file and per-locale messages fill the rest
fn integration_sample_config() {
    let path = sample_config();
    let options = load_options(&path).expect("sample config should load");
    assert_eq!(options.default_locale, "ja");
    assert_eq!(options.strategy, Strategy::Prefix);

    let root = path.parent().unwrap_or(Path::new("."));
    let runtime = setup(&options, root).runtime();
    assert_eq!(runtime.locale_codes(), vec!["en", "ja", "zh"]);
    assert_eq!(runtime.locales[1].name(), "日本語");

    let en = &runtime.messages["en"];
    assert_eq!(en.get("welcome"), Some(&json!("Welcome to {appName}")));
    assert_eq!(en.get("hello"), Some(&json!("Hello")));
    assert_eq!(en.get("bye"), Some(&json!("Goodbye")));
    assert_eq!(runtime.messages["ja"].get("hello"), Some(&json!("こんにちは")));
    assert_eq!(
        runtime.messages["zh"]["home"]["header"]["notify"],
        json!("您有 {count} 条新消息")
    );
    assert_eq!(runtime.messages["zh"].get("hello"), Some(&json!("你好")));
}

#[test]
/// What: End-to-end request against the sample configuration.
fn integration_sample_request() {
    let path = sample_config();
    let options = load_options(&path).expect("sample config should load");
    let setup = setup(&options, path.parent().unwrap_or(Path::new(".")));

    let (outcome, ctx) = setup.begin_request("/ja/home", Some("zh-CN,zh;q=0.9"));
    assert_eq!(outcome.locale, "ja");
    assert_eq!(outcome.redirect, None);
    assert_eq!(ctx.t("hello"), "こんにちは");

    let (outcome, ctx) = setup.begin_request("/", Some("zh-CN,zh;q=0.9"));
    assert_eq!(outcome.redirect.as_deref(), Some("/zh"));
    let params: i18n_code::i18n::TranslationParams =
        [("appName".to_string(), "Demo".to_string())].into();
    assert_eq!(ctx.t_with("welcome", &params), "欢迎来到 Demo");
}

#[test]
/// What: Broken message sources are skipped and setup still succeeds.
fn integration_invalid_sources_are_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let root = temp_dir.path();
    fs::create_dir(root.join("locales")).expect("Failed to create locales dir");
    fs::write(root.join("locales").join("en.yml"), "hello: [unclosed")
        .expect("Failed to write broken locale file");
    fs::write(root.join("messages.json"), "{not json").expect("Failed to write broken messages");
    fs::write(
        root.join("i18n.yml"),
        "locales: [en, zh]\nconfigFile: messages.json\nlocalesDir: locales\nmessages:\n  zh:\n    hello: 你好\n",
    )
    .expect("Failed to write test config file");

    let options = load_options(&root.join("i18n.yml")).expect("config should load");
    let runtime = setup(&options, root).runtime();
    assert!(runtime.messages["en"].is_empty());
    assert_eq!(runtime.messages["zh"].get("hello"), Some(&json!("你好")));
    assert_eq!(runtime.default_locale, "en");
}
