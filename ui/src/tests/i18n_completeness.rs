//! Locale bundles must cover every key the sources look up, and nothing more.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "sentinel_ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message ids with their definition counts. Comments, terms and attributes are skipped.
fn ftl_key_counts(content: &str) -> BTreeMap<String, usize> {
    let mut keys = BTreeMap::new();
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with(['#', '-', '.']) {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() && id.chars().all(is_key_char) {
                *keys.entry(id.to_string()).or_insert(0) += 1;
            }
        }
    }
    keys
}

/// Literal first arguments of `t!("...")` across every `.rs` file under `dir`.
fn referenced_keys(dir: &Path, found: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            referenced_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in content.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                if !key.is_empty() && key.chars().all(is_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
}

fn locale_bundles() -> BTreeMap<String, String> {
    let i18n_root = crate_root().join("i18n");
    let mut bundles = BTreeMap::new();
    for entry in fs::read_dir(&i18n_root).expect("i18n directory").flatten() {
        let path = entry.path();
        let Some(locale) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if path.is_dir() && locale.contains('-') {
            let content = fs::read_to_string(path.join(FTL_FILENAME))
                .unwrap_or_else(|_| panic!("{locale} is missing {FTL_FILENAME}"));
            bundles.insert(locale.to_string(), content);
        }
    }
    bundles
}

#[test]
fn no_locale_defines_a_key_twice() {
    for (locale, content) in locale_bundles() {
        let dups: Vec<_> = ftl_key_counts(&content)
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(k, _)| k)
            .collect();
        assert!(dups.is_empty(), "{locale} defines keys more than once: {dups:?}");
    }
}

#[test]
fn fallback_matches_source_lookups_exactly() {
    let bundles = locale_bundles();
    let fallback: BTreeSet<_> = ftl_key_counts(&bundles[FALLBACK]).into_keys().collect();
    let mut used = BTreeSet::new();
    referenced_keys(&crate_root().join("src"), &mut used);

    let missing: Vec<_> = used.difference(&fallback).collect();
    assert!(missing.is_empty(), "looked up but not in {FALLBACK}: {missing:?}");

    let stale: Vec<_> = fallback.difference(&used).collect();
    assert!(stale.is_empty(), "{FALLBACK} keys never looked up: {stale:?}");
}

#[test]
fn every_locale_covers_the_fallback() {
    let bundles = locale_bundles();
    let fallback: BTreeSet<_> = ftl_key_counts(&bundles[FALLBACK]).into_keys().collect();
    assert!(bundles.len() > 1, "expected at least one translation");

    for (locale, content) in &bundles {
        let keys: BTreeSet<_> = ftl_key_counts(content).into_keys().collect();
        let missing: Vec<_> = fallback.difference(&keys).collect();
        assert!(missing.is_empty(), "{locale} is missing {missing:?}");
    }
}
