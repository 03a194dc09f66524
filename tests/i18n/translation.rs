//! Integration tests for the translation context.

use std::sync::Arc;

use i18n_code::i18n::messages::messages_from_value;
use i18n_code::i18n::{I18n, LocaleState, TranslationParams, deep_merge, translate};
use i18n_code::{Locale, RuntimeConfig};
use serde_json::json;

/// What: Runtime config with English and Chinese dictionaries.
fn runtime() -> Arc<RuntimeConfig> {
    Arc::new(RuntimeConfig {
        default_locale: "en".to_string(),
        locales: vec![Locale::from("en"), Locale::from("zh"), Locale::from("ja")],
        messages: messages_from_value(json!({
            "en": {
                "hello": "Hello",
                "welcome": "Welcome to {appName}",
                "home": {"header": {"notify": "{count} new for {user}"}},
            },
            "zh": {"hello": "你好", "welcome": "欢迎来到 {appName}"},
        }))
        .expect("test messages should be a mapping"),
        ..RuntimeConfig::default()
    })
}

fn params(pairs: &[(&str, &str)]) -> TranslationParams {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
/// What: `t("welcome", {appName: "Foo"})` fills the placeholder.
fn integration_welcome_placeholder() {
    let ctx = I18n::new(runtime(), LocaleState::new(), "/en");
    assert_eq!(ctx.t_with("welcome", &params(&[("appName", "Foo")])), "Welcome to Foo");
}

#[test]
/// What: Keys absent from every dictionary come back unchanged.
fn integration_missing_key_is_identity() {
    let rt = runtime();
    for locale in ["en", "zh", "ja", "fr"] {
        for key in ["absent", "home.absent", "home.header.notify.deeper", ""] {
            assert_eq!(translate(key, &rt.messages, locale, None), key);
        }
    }
}

#[test]
/// What: Locales without a dictionary use English; unresolved placeholders vanish.
///
/// Details:
/// - `ja` is configured but has no dictionary in this store
fn integration_fallback_and_partial_params() {
    let mut state = LocaleState::new();
    state.set("ja");
    let ctx = I18n::new(runtime(), state, "/ja");
    assert_eq!(ctx.t("hello"), "Hello");
    assert_eq!(
        ctx.t_with("home.header.notify", &params(&[("count", "3")])),
        "3 new for "
    );
}

#[test]
/// What: Switching locale changes lookups and yields the switched path.
fn integration_switch_locale() {
    let mut ctx = I18n::new(runtime(), LocaleState::new(), "/en/docs/intro");
    assert_eq!(ctx.set_locale("zh").as_deref(), Some("/zh/docs/intro"));
    assert_eq!(ctx.t("hello"), "你好");
    assert_eq!(ctx.locale_path("/pricing"), "/zh/pricing");
    assert_eq!(ctx.set_locale("ko"), None);
    assert_eq!(ctx.locale(), "zh");
}

#[test]
/// What: Overlaying a source tree twice gives the same result as once.
fn integration_deep_merge_overlay_stable() {
    let base = json!({"a": {"b": "1", "c": "2"}, "d": ["x"]});
    let overlay = json!({"a": {"b": "override"}, "d": ["y", "z"], "e": "new"});
    let once = deep_merge(base.clone(), overlay.clone());
    assert_eq!(deep_merge(base, once.clone()), once);
    assert_eq!(once["d"], json!(["y", "z"]));
    assert_eq!(once["a"]["c"], json!("2"));
}
