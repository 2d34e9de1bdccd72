// crates/tool-atlas-core/tests/catalog.rs
// ============================================================================
// Module: Catalog Loading Tests
// Description: Validation of the embedded catalog and load-time rejections.
// Purpose: Ensure authoring defects fail fast with a precise error.
// ============================================================================

//! Integration tests for catalog loading and validation.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use std::collections::BTreeSet;

use common::tool;
use tool_atlas_core::Catalog;
use tool_atlas_core::CatalogError;
use tool_atlas_core::Category;
use tool_atlas_core::Locale;
use tool_atlas_core::Tier;
use tool_atlas_core::ToolId;

#[test]
fn builtin_catalog_loads_and_covers_every_category() {
    let catalog = Catalog::builtin().unwrap();
    assert!(!catalog.is_empty());
    let categories: BTreeSet<Category> = catalog.tools().iter().map(|tool| tool.category).collect();
    assert_eq!(categories.len(), Category::ALL.len());
    assert!(catalog.tools().iter().any(|tool| tool.tier.is_none()));
    assert!(catalog.tools().iter().any(|tool| tool.pricing.is_empty()));
}

#[test]
fn builtin_catalog_lookup_by_id() {
    let catalog = Catalog::builtin().unwrap();
    let first = &catalog.tools()[0];
    assert_eq!(catalog.get(first.id.as_str()), Some(first));
    assert_eq!(catalog.get("does-not-exist"), None);
}

#[test]
fn duplicate_ids_are_rejected() {
    let tools = vec![
        tool("same", Category::Automation, Some(Tier::Tier1)),
        tool("same", Category::Agents, None),
    ];
    assert_eq!(Catalog::from_tools(tools), Err(CatalogError::DuplicateId(ToolId::new("same"))));
}

#[test]
fn blank_localized_text_is_rejected() {
    let mut broken = tool("x", Category::Knowledge, None);
    broken.description.es = "   ".to_string();
    assert_eq!(
        Catalog::from_tools(vec![broken]),
        Err(CatalogError::MissingLocale {
            tool: ToolId::new("x"),
            field: "description",
            locale: Locale::Es,
        })
    );
}

#[test]
fn empty_localized_list_is_rejected() {
    let mut broken = tool("x", Category::Knowledge, None);
    broken.highlights.en.clear();
    assert!(matches!(
        Catalog::from_tools(vec![broken]),
        Err(CatalogError::MissingLocale {
            field: "highlights",
            locale: Locale::En,
            ..
        })
    ));
}

#[test]
fn blank_name_is_rejected() {
    let mut broken = tool("x", Category::Knowledge, None);
    broken.name = String::new();
    assert!(matches!(
        Catalog::from_tools(vec![broken]),
        Err(CatalogError::EmptyField {
            field: "name",
            ..
        })
    ));
}

#[test]
fn missing_locale_key_fails_parsing() {
    let payload = r#"[{
        "id": "x",
        "name": "X",
        "short_description": {"en": "only english"},
        "description": {"en": "d", "es": "d"},
        "category": "agents",
        "level": "beginner",
        "use_cases": {"en": ["u"], "es": ["u"]},
        "highlights": {"en": ["h"], "es": ["h"]},
        "url": "https://example.com"
    }]"#;
    assert!(matches!(Catalog::from_json(payload), Err(CatalogError::Parse(_))));
}

#[test]
fn unknown_category_fails_parsing() {
    let payload = r#"[{
        "id": "x",
        "name": "X",
        "short_description": {"en": "s", "es": "s"},
        "description": {"en": "d", "es": "d"},
        "category": "robotics",
        "level": "beginner",
        "use_cases": {"en": ["u"], "es": ["u"]},
        "highlights": {"en": ["h"], "es": ["h"]},
        "url": "https://example.com"
    }]"#;
    assert!(matches!(Catalog::from_json(payload), Err(CatalogError::Parse(_))));
}

#[test]
fn display_helpers_summarize_pricing_and_departments() {
    let catalog = Catalog::builtin().unwrap();
    let cursor = catalog.get("cursor").unwrap();
    assert_eq!(cursor.starting_price(), Some("$0"));
    assert_eq!(cursor.price_range().as_deref(), Some("$0 - $40/user/mo"));
    let notebook = catalog.get("notebooklm").unwrap();
    assert_eq!(notebook.starting_price(), None);
    assert_eq!(notebook.price_range(), None);
    let relevance = catalog.get("relevance-ai").unwrap();
    let preview = relevance.department_preview(3);
    assert_eq!(preview.shown.len(), 3);
    assert_eq!(preview.hidden, 2);
}
