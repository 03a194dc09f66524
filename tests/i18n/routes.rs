//! Integration tests for locale-prefixed routes.

use i18n_code::i18n::{Page, extend_pages, prefix_routes};
use i18n_code::Locale;

fn locales(codes: &[&str]) -> Vec<Locale> {
    codes.iter().copied().map(Locale::from).collect()
}

#[test]
/// What: The root page yields exactly one bare prefix per locale, in order.
fn integration_root_page() {
    assert_eq!(
        prefix_routes(&[Page::new("/")], &locales(&["en", "zh"])),
        vec![Page::new("/en"), Page::new("/zh")]
    );
}

#[test]
/// What: Output size is pages x locales and names carry the locale.
fn integration_route_table() {
    let pages = vec![
        Page::named("/", "index"),
        Page::named("/about", "about"),
        Page::new("/blog/:slug"),
    ];
    let codes = ["en", "ja", "zh"];
    let out = prefix_routes(&pages, &locales(&codes));
    assert_eq!(out.len(), pages.len() * codes.len());
    assert_eq!(out[3], Page::named("/en/about", "en___about"));
    assert_eq!(out[8], Page::new("/zh/blog/:slug"));
    assert!(out.iter().all(|p| codes.iter().any(|c| p.path.starts_with(&format!("/{c}")))));
}

#[test]
/// What: Extending a table keeps the originals in front.
fn integration_extend_pages() {
    let mut table = vec![Page::new("/"), Page::new("/contact")];
    let added = extend_pages(&mut table, &locales(&["en", "zh"]));
    assert_eq!(added, 4);
    let paths: Vec<&str> = table.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "/contact", "/en", "/zh", "/en/contact", "/zh/contact"]);
}
