// crates/tool-atlas-views/tests/render.rs
// ============================================================================
// Module: Renderer Tests
// Description: HTML output checks across design variants.
// Purpose: Verify shared chrome, per-variant layouts, and safe output.
// Dependencies: tool-atlas-views, tool-atlas-core, tool-atlas-config
// ============================================================================

//! ## Overview
//! Builds page models over the builtin catalog (and one hostile catalog) and
//! checks the rendered documents for the markers each variant must emit.

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

// ============================================================================
// SECTION: Imports
// ============================================================================

use tool_atlas_config::DisplayConfig;
use tool_atlas_core::AxisFilter;
use tool_atlas_core::Catalog;
use tool_atlas_core::Category;
use tool_atlas_core::ViewVariant;
use tool_atlas_views::PageModel;
use tool_atlas_views::PageQuery;
use tool_atlas_views::PageState;
use tool_atlas_views::render_page;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn render(catalog: &Catalog, raw: &str) -> String {
    let defaults = DisplayConfig::default();
    let state = PageState::resolve(&PageQuery::parse(raw), &defaults);
    render_page(&PageModel::build(catalog, state), &defaults)
}

fn builtin() -> &'static Catalog {
    Catalog::builtin().expect("builtin catalog")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Every variant renders a complete document with the shared header.
#[test]
fn every_variant_renders_shared_chrome() {
    for variant in ViewVariant::ALL {
        let html = render(builtin(), &format!("design={}", variant.as_str()));
        assert!(html.starts_with("<!doctype html>"), "{variant}");
        assert!(html.ends_with("</html>"), "{variant}");
        assert!(html.contains("AI Tool Atlas"), "{variant}");
        assert!(html.contains(&format!("variant-{}", variant.as_str())), "{variant}");
        for other in ViewVariant::ALL {
            assert!(html.contains(other.display_name()), "{variant} switcher lacks {other}");
        }
    }
}

/// The language toggle links to the same page in the other locale.
#[test]
fn language_toggle_preserves_state() {
    let html = render(builtin(), "design=bento&category=agents");
    assert!(html.contains("href=\"/?design=bento&amp;lang=es&amp;category=agents\""));
    assert!(html.contains(">Español</a>"));
}

/// Spanish pages translate chrome and catalog text.
#[test]
fn spanish_page_uses_spanish_labels() {
    let html = render(builtin(), "lang=es");
    assert!(html.contains("<html lang=\"es\">"));
    assert!(html.contains("18 herramientas"));
    assert!(html.contains("Conecta miles de aplicaciones"));
}

/// Expanded cards show details and a safe external link.
#[test]
fn expanded_card_shows_details_and_safe_link() {
    let html = render(builtin(), "design=catalog&open=zapier");
    assert!(html.contains("Route new leads to the CRM"));
    assert!(html.contains("href=\"https://zapier.com\" target=\"_blank\" rel=\"noopener noreferrer\""));
    assert!(html.contains("Hide details"));
}

/// Tools without plans show the contact placeholder.
#[test]
fn missing_pricing_shows_contact_placeholder() {
    let html = render(builtin(), "design=catalog&category=knowledge&open=notebooklm");
    assert!(html.contains("Contact for pricing"));
}

/// Department previews cap at three with an overflow marker.
#[test]
fn department_preview_marks_overflow() {
    let html = render(builtin(), "design=catalog&category=agents");
    assert!(html.contains("<span class=\"department-more\">+2</span>"));
}

/// An unmatched search shows the empty state with a reset link.
#[test]
fn empty_result_shows_empty_state() {
    let html = render(builtin(), "q=zzzz-no-such-tool");
    assert!(html.contains("No tools match these filters."));
    assert!(html.contains("class=\"clear-filters\" href=\"/\""));
    assert!(html.contains("0 tools"));
}

/// Untiered filter on a variant without the option matches nothing.
#[test]
fn untiered_filter_is_empty_where_not_offered() {
    let html = render(builtin(), "design=linear&tier=untiered");
    assert!(html.contains("No tools match these filters."));
    let bento = render(builtin(), "design=bento&tier=untiered");
    assert!(bento.contains("3 tools"));
}

/// Facet counts cover the full catalog regardless of active filters.
#[test]
fn facet_counts_ignore_active_filters() {
    let html = render(builtin(), "design=bento&category=agents");
    assert!(html.contains("Unranked (3)"));
    assert!(html.contains("Automation (3)"));
}

/// The explorer detail panel shows the focused tool or a prompt.
#[test]
fn explorer_detail_panel_follows_focus() {
    let idle = render(builtin(), "design=explorer");
    assert!(idle.contains("Select a tool to see its details."));
    let focused = render(builtin(), "design=explorer&focus=perplexity");
    assert!(focused.contains("class=\"close-detail\""));
}

/// Collapsed notion sections hide their tools but keep the count.
#[test]
fn notion_sections_collapse() {
    let html = render(builtin(), "design=notion&sections=agents");
    assert!(html.contains("id=\"section-automation\""));
    assert!(!html.contains("id=\"tool-zapier\""));
    assert!(html.contains("id=\"tool-crewai\""));
}

/// Catalog text is escaped before output.
#[test]
fn catalog_text_is_escaped() {
    let payload = r#"[{
        "id": "xss",
        "name": "<script>alert(1)</script>",
        "short_description": {"en": "a \"quoted\" & <b>bold</b> claim", "es": "texto"},
        "description": {"en": "desc", "es": "desc"},
        "category": "agents",
        "level": "beginner",
        "use_cases": {"en": ["one"], "es": ["uno"]},
        "highlights": {"en": ["two"], "es": ["dos"]},
        "url": "https://example.com/?a=1&b=2"
    }]"#;
    let catalog = Catalog::from_json(payload).expect("catalog");
    let html = render(&catalog, "design=catalog&category=agents&open=xss");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("a &quot;quoted&quot; &amp; &lt;b&gt;bold&lt;/b&gt; claim"));
    assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
}

/// Tier options with no tools are left out of counted filter bars.
#[test]
fn empty_tier_options_are_hidden() {
    let payload = r#"[{
        "id": "solo",
        "name": "Solo",
        "short_description": {"en": "one", "es": "uno"},
        "description": {"en": "desc", "es": "desc"},
        "category": "agents",
        "level": "beginner",
        "tier": "tier1",
        "use_cases": {"en": ["one"], "es": ["uno"]},
        "highlights": {"en": ["two"], "es": ["dos"]},
        "url": "https://example.com"
    }]"#;
    let catalog = Catalog::from_json(payload).expect("catalog");

    let html = render(&catalog, "design=apple");
    assert!(html.contains("tier=tier1"));
    assert!(!html.contains("tier=tier2"));
    assert!(!html.contains("tier=tier3"));
    assert!(!html.contains("tier=untiered"));

    let selected = render(&catalog, "design=apple&tier=tier2");
    assert!(selected.contains("tier=tier2"));

    let uncounted = render(&catalog, "design=notion");
    assert!(uncounted.contains("tier=tier2"));
}

/// Filtering an expanded item out of view drops its expansion.
#[test]
fn expansion_resets_when_item_is_filtered_out() {
    let defaults = DisplayConfig::default();
    let state = PageState::resolve(&PageQuery::parse("design=linear&open=zapier"), &defaults);
    let open = PageModel::build(builtin(), state);
    assert!(open.state.expanded.is_expanded("zapier"));

    let hidden = PageModel::build(builtin(), open.state.with_category(AxisFilter::Is(Category::Agents)));
    assert!(hidden.state.expanded.is_empty());
    assert!(!render_page(&hidden, &defaults).contains("open=zapier"));

    let reselected =
        PageModel::build(builtin(), hidden.state.with_category(AxisFilter::Is(Category::Automation)));
    assert!(!reselected.state.expanded.is_expanded("zapier"));
    let html = render_page(&reselected, &defaults);
    assert!(html.contains("#tool-zapier\" aria-expanded=\"false\">Show details</a>"));
}
