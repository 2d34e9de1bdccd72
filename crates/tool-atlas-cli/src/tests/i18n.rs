// crates/tool-atlas-cli/src/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Unit tests for catalog parity and locale parsing.
// Purpose: Ensure CLI localization remains consistent across supported locales.
// Dependencies: tool-atlas-cli i18n module
// ============================================================================

//! ## Overview
//! Verifies the CLI message catalogs stay in sync, placeholders match, and
//! representative Spanish strings differ from English.

use std::collections::BTreeSet;

use crate::i18n::Locale;
use crate::i18n::SUPPORTED_LOCALES;
use crate::i18n::catalog_entries_for;
use crate::i18n::catalog_for;

/// Collects `{name}` placeholders from a template.
fn placeholder_names(template: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1 ..];
        let Some(end) = after.find('}') else {
            break;
        };
        names.insert(after[.. end].to_string());
        rest = &after[end + 1 ..];
    }
    names
}

#[test]
fn catalogs_have_matching_keys() {
    assert!(SUPPORTED_LOCALES.contains(&Locale::En), "English must remain the baseline locale");
    let en_keys: BTreeSet<&'static str> = catalog_for(Locale::En).keys().copied().collect();
    for locale in SUPPORTED_LOCALES {
        let locale_keys: BTreeSet<&'static str> = catalog_for(*locale).keys().copied().collect();
        assert_eq!(en_keys, locale_keys, "locale catalogs must stay in parity ({locale})");
    }
}

#[test]
fn catalog_keys_are_unique() {
    for locale in SUPPORTED_LOCALES {
        let entries = catalog_entries_for(*locale);
        let unique: BTreeSet<&str> = entries.iter().map(|(key, _)| *key).collect();
        assert_eq!(unique.len(), entries.len(), "duplicate key in {locale} catalog");
    }
}

#[test]
fn placeholders_match_across_locales() {
    let en = catalog_for(Locale::En);
    for (key, template) in catalog_entries_for(Locale::Es) {
        let english = en.get(key).copied().expect("english key");
        assert_eq!(placeholder_names(template), placeholder_names(english), "placeholders for {key}");
    }
}

#[test]
fn locale_parse_accepts_region_tags_and_case() {
    assert_eq!(Locale::parse("en"), Some(Locale::En));
    assert_eq!(Locale::parse("EN"), Some(Locale::En));
    assert_eq!(Locale::parse("en-US"), Some(Locale::En));
    assert_eq!(Locale::parse("es"), Some(Locale::Es));
    assert_eq!(Locale::parse("es_MX"), Some(Locale::Es));
    assert_eq!(Locale::parse(""), None);
    assert_eq!(Locale::parse("ca"), None);
}

#[test]
fn spanish_translation_differs_for_known_key() {
    let en = catalog_for(Locale::En).get("config.validate.ok").copied().expect("en key exists");
    let es = catalog_for(Locale::Es).get("config.validate.ok").copied().expect("es key exists");
    assert_ne!(en, es, "expected Spanish translation to differ from English");
}

#[test]
fn translate_uses_cli_catalog_with_shared_substitution() {
    let message = crate::t!("tool.not_found", id = "nope");
    assert!(message.contains("nope"));
    assert!(!message.contains("{id}"));
    assert_eq!(crate::i18n::translate("no.such.key", Vec::new()), "no.such.key");
}
