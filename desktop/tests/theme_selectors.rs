#![cfg(test)]
/*!
Selector lint for the shared theme.

Components in `ui/src/scan` emit these class names; if a refactor renames one in
the markup or the stylesheet without the other, the packaged desktop build loses
that styling silently. Update REQUIRED_SELECTORS together with the markup.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".header__brand-mark",
    ".backdrop__globe",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Landing -> dashboard cross-fade
    ".landing {",
    ".landing--leaving",
    ".dashboard {",
    ".dashboard__grid",
    ".console__line",
    // Report cards
    ".card {",
    ".card__header",
    ".data-list__row",
    ".status--secure",
    ".load-chart__grid",
    ".load-chart__swatch",
    ".threat__name",
    ".app-tile--medium",
    ".file-scan__duplicates",
    // Contact acknowledgment states
    ".contact__submit",
    ".contact__submit--busy",
    ".contact__submit--secure",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn console_stays_pinned_to_the_newest_line() {
    let start = THEME_CSS.find(".console {").expect(".console rule");
    let rule = &THEME_CSS[start..];
    let rule = &rule[..rule.find('}').expect("closing brace")];
    for decl in ["flex-direction: column-reverse", "overflow-y: auto"] {
        assert!(rule.contains(decl), ".console is missing `{decl}`");
    }
}
