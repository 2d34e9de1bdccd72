// crates/tool-atlas-core/tests/pipeline.rs
// ============================================================================
// Module: Selection Pipeline Tests
// Description: Scenario coverage for filtering, tier sorting, and grouping.
// Purpose: Pin the documented result sets for the shared pipeline.
// ============================================================================

//! Integration tests for the selection pipeline.

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

use common::ids;
use common::scenario;
use common::tool_with;
use tool_atlas_core::AxisFilter;
use tool_atlas_core::Category;
use tool_atlas_core::FacetCounts;
use tool_atlas_core::Level;
use tool_atlas_core::Locale;
use tool_atlas_core::Selection;
use tool_atlas_core::SortOrder;
use tool_atlas_core::Tier;
use tool_atlas_core::TierFilter;
use tool_atlas_core::runtime::apply;
use tool_atlas_core::runtime::group_by_category;

fn select(category: Option<Category>, tier: Option<Tier>) -> Selection {
    Selection {
        category: category.map_or(AxisFilter::Any, AxisFilter::Is),
        tier: tier.map_or(TierFilter::Any, TierFilter::Is),
        ..Selection::default()
    }
}

#[test]
fn category_filter_keeps_matching_tools_in_tier_order() {
    let tools = scenario();
    let result = apply(&tools, &select(Some(Category::Automation), None), Locale::En, SortOrder::TierRank);
    assert_eq!(ids(&result), ["a", "b", "e"]);
}

#[test]
fn tier_filter_spans_categories() {
    let tools = scenario();
    let result = apply(&tools, &select(None, Some(Tier::Tier1)), Locale::En, SortOrder::TierRank);
    assert_eq!(ids(&result), ["a", "d"]);
}

#[test]
fn combined_filters_are_conjunctive() {
    let tools = scenario();
    let result = apply(
        &tools,
        &select(Some(Category::Automation), Some(Tier::Tier1)),
        Locale::En,
        SortOrder::TierRank,
    );
    assert_eq!(ids(&result), ["a"]);
}

#[test]
fn tier_sort_places_untiered_last() {
    let tools = scenario();
    let result = apply(&tools, &Selection::default(), Locale::En, SortOrder::TierRank);
    assert_eq!(ids(&result), ["a", "d", "b", "e", "c"]);
}

#[test]
fn catalog_order_is_kept_without_ranking() {
    let tools = scenario();
    let result = apply(&tools, &Selection::default(), Locale::En, SortOrder::Catalog);
    assert_eq!(ids(&result), ["a", "b", "c", "d", "e"]);
}

#[test]
fn untiered_filter_selects_only_unranked_tools() {
    let tools = scenario();
    let selection = Selection {
        tier: TierFilter::Untiered,
        ..Selection::default()
    };
    let result = apply(&tools, &selection, Locale::En, SortOrder::TierRank);
    assert_eq!(ids(&result), ["c"]);
}

#[test]
fn unknown_boundary_values_yield_empty_results() {
    let tools = scenario();
    let selection = Selection {
        category: AxisFilter::from_param(Some("robots"), Category::parse),
        ..Selection::default()
    };
    assert_eq!(selection.category, AxisFilter::Unmatched);
    assert!(apply(&tools, &selection, Locale::En, SortOrder::TierRank).is_empty());

    let selection = Selection {
        tier: TierFilter::from_param(Some("tier9")),
        ..Selection::default()
    };
    assert_eq!(selection.tier, TierFilter::Unmatched);
    assert!(apply(&tools, &selection, Locale::En, SortOrder::TierRank).is_empty());
}

#[test]
fn blank_boundary_values_are_inactive() {
    assert_eq!(AxisFilter::from_param(Some("  "), Level::parse), AxisFilter::Any);
    assert_eq!(AxisFilter::from_param(None, Level::parse), AxisFilter::Any);
    assert_eq!(TierFilter::from_param(Some("")), TierFilter::Any);
    assert_eq!(TierFilter::from_param(Some("Untiered")), TierFilter::Untiered);
}

#[test]
fn search_matches_name_and_localized_descriptions() {
    let tools = vec![
        tool_with("alpha", Category::Automation, None, Level::Beginner, "Sends invoices"),
        tool_with("beta", Category::Agents, None, Level::Advanced, "Writes poems"),
    ];
    let by_name = Selection {
        query: "ALPHA".to_string(),
        ..Selection::default()
    };
    assert_eq!(ids(&apply(&tools, &by_name, Locale::En, SortOrder::Catalog)), ["alpha"]);

    let spanish_only = Selection {
        query: "poems (es)".to_string(),
        ..Selection::default()
    };
    assert!(apply(&tools, &spanish_only, Locale::En, SortOrder::Catalog).is_empty());
    assert_eq!(ids(&apply(&tools, &spanish_only, Locale::Es, SortOrder::Catalog)), ["beta"]);

    let by_description = Selection {
        query: "descripción".to_string(),
        ..Selection::default()
    };
    assert_eq!(apply(&tools, &by_description, Locale::Es, SortOrder::Catalog).len(), 2);
}

#[test]
fn search_matches_the_query_as_typed() {
    let tools = vec![tool_with("ab", Category::Agents, None, Level::Beginner, "abc")];
    let trailing_space = Selection {
        query: "abc ".to_string(),
        ..Selection::default()
    };
    assert!(apply(&tools, &trailing_space, Locale::En, SortOrder::Catalog).is_empty());
    assert_eq!(ids(&apply(&tools, &trailing_space, Locale::Es, SortOrder::Catalog)), ["ab"]);

    let spaces_only = Selection {
        query: "   ".to_string(),
        ..Selection::default()
    };
    assert!(spaces_only.has_active_filters());
    assert!(apply(&tools, &spaces_only, Locale::En, SortOrder::Catalog).is_empty());
}

#[test]
fn search_folds_case_beyond_ascii() {
    let tools = vec![tool_with("street", Category::Agents, None, Level::Beginner, "Straße maps")];
    for query in ["ß", "SS", "ss", "STRASSE", "straße"] {
        let selection = Selection {
            query: query.to_string(),
            ..Selection::default()
        };
        assert_eq!(
            ids(&apply(&tools, &selection, Locale::En, SortOrder::Catalog)),
            ["street"],
            "query {query}"
        );
    }
}

#[test]
fn level_filter_applies_with_other_axes() {
    let tools = vec![
        tool_with("one", Category::Automation, Some(Tier::Tier1), Level::Beginner, "x"),
        tool_with("two", Category::Automation, Some(Tier::Tier1), Level::Advanced, "y"),
    ];
    let selection = Selection {
        category: AxisFilter::Is(Category::Automation),
        level: AxisFilter::Is(Level::Advanced),
        ..Selection::default()
    };
    assert_eq!(ids(&apply(&tools, &selection, Locale::En, SortOrder::TierRank)), ["two"]);
}

#[test]
fn grouping_follows_category_order_and_omits_empty_groups() {
    let tools = scenario();
    let result = apply(&tools, &Selection::default(), Locale::En, SortOrder::TierRank);
    let groups = group_by_category(&result);
    let categories: Vec<Category> = groups.iter().map(|group| group.category).collect();
    assert_eq!(categories, [Category::Automation, Category::Agents]);
    assert_eq!(ids(&groups[0].tools), ["a", "b", "e"]);
    assert_eq!(ids(&groups[1].tools), ["d", "c"]);
}

#[test]
fn facet_counts_cover_every_axis_value() {
    let tools = scenario();
    let facets = FacetCounts::from_tools(&tools);
    assert_eq!(facets.total, 5);
    assert_eq!(facets.category(Category::Automation), 3);
    assert_eq!(facets.category(Category::Agents), 2);
    assert_eq!(facets.category(Category::Development), 0);
    assert_eq!(facets.tier(Tier::Tier1), 2);
    assert_eq!(facets.tier(Tier::Tier3), 1);
    assert_eq!(facets.untiered, 1);
    assert_eq!(facets.level(Level::Beginner), 5);
}

#[test]
fn active_filter_detection() {
    assert!(!Selection::default().has_active_filters());
    let selection = Selection {
        query: " x ".to_string(),
        ..Selection::default()
    };
    assert!(selection.has_active_filters());
    assert!(select(Some(Category::Agents), None).has_active_filters());
}
