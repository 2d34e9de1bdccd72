// crates/tool-atlas-views/src/model.rs
// ============================================================================
// Module: Page Model
// Description: Pipeline output prepared for one render.
// Purpose: Run the shared pipeline once per request for HTML and JSON alike.
// Dependencies: tool-atlas-core
// ============================================================================

//! ## Overview
//! [`PageModel::build`] applies the variant's ordering to the catalog, groups
//! the result when the layout needs it, counts facets, and drops expansion
//! state for tools that are no longer visible.

use tool_atlas_core::Catalog;
use tool_atlas_core::CategoryGroup;
use tool_atlas_core::FacetCounts;
use tool_atlas_core::Tool;
use tool_atlas_core::runtime::apply;
use tool_atlas_core::runtime::group_by_category;

use crate::page::PageState;
use crate::variant::Layout;
use crate::variant::Theme;
use crate::variant::ViewCapabilities;
use crate::variant::capabilities;
use crate::variant::theme;

/// Everything a renderer needs for one page.
#[derive(Debug, Clone)]
pub struct PageModel<'a> {
    /// Resolved state with expansion pruned to visible tools.
    pub state: PageState,
    /// Variant behavior.
    pub capabilities: ViewCapabilities,
    /// Variant theme.
    pub theme: Theme,
    /// Visible tools in display order.
    pub tools: Vec<&'a Tool>,
    /// Visible tools grouped by category (sections layout only).
    pub groups: Vec<CategoryGroup<'a>>,
    /// Facet counts over the full catalog.
    pub facets: FacetCounts,
}

impl<'a> PageModel<'a> {
    /// Runs the pipeline for `state` over `catalog`.
    #[must_use]
    pub fn build(catalog: &'a Catalog, mut state: PageState) -> Self {
        let capabilities = capabilities(state.variant);
        let tools = apply(catalog.tools(), &state.selection, state.locale, capabilities.order);
        let groups = if capabilities.layout == Layout::Sections {
            group_by_category(&tools)
        } else {
            Vec::new()
        };
        state.expanded.retain_visible(&tools);
        state.focus.retain_visible(&tools);
        Self {
            theme: theme(state.variant),
            facets: FacetCounts::from_tools(catalog.tools()),
            capabilities,
            tools,
            groups,
            state,
        }
    }

    /// Returns true when no tool is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
