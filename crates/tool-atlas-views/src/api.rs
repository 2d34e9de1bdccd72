// crates/tool-atlas-views/src/api.rs
// ============================================================================
// Module: JSON Payloads
// Description: Response bodies for the JSON endpoints and CLI output.
// Purpose: Share one serialized shape between HTTP and command-line callers.
// Dependencies: tool-atlas-core, serde
// ============================================================================

//! ## Overview
//! Payloads borrow from the catalog and the [`PageModel`]; they are built per
//! request and serialized immediately.

use serde::Serialize;
use tool_atlas_core::FacetCounts;
use tool_atlas_core::Locale;
use tool_atlas_core::Tool;
use tool_atlas_core::ViewVariant;

use crate::model::PageModel;
use crate::variant::Theme;
use crate::variant::ViewCapabilities;
use crate::variant::capabilities;
use crate::variant::theme;

// ============================================================================
// SECTION: Payloads
// ============================================================================

/// Filter echo included with tool listings.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionEcho {
    /// Category key, when filtered.
    pub category: Option<&'static str>,
    /// Tier key or `untiered`, when filtered.
    pub tier: Option<&'static str>,
    /// Level key, when filtered.
    pub level: Option<&'static str>,
    /// Search text, when present.
    pub q: Option<String>,
}

/// Filtered tool listing.
#[derive(Debug, Clone, Serialize)]
pub struct ToolsResponse<'a> {
    /// Variant whose filters and ordering were applied.
    pub design: ViewVariant,
    /// Locale used for search matching.
    pub locale: Locale,
    /// Effective filters.
    pub selection: SelectionEcho,
    /// Number of tools returned.
    pub count: usize,
    /// Tools in display order.
    pub tools: Vec<&'a Tool>,
    /// Facet counts over the full catalog.
    pub facets: &'a FacetCounts,
}

impl<'a> ToolsResponse<'a> {
    /// Builds the listing from a page model.
    #[must_use]
    pub fn from_model(model: &'a PageModel<'a>) -> Self {
        let selection = &model.state.selection;
        Self {
            design: model.state.variant,
            locale: model.state.locale,
            selection: SelectionEcho {
                category: selection.category.selected().map(|category| category.as_str()),
                tier: selection.tier.as_param(),
                level: selection.level.selected().map(|level| level.as_str()),
                q: (!selection.query.is_empty()).then(|| selection.query.clone()),
            },
            count: model.tools.len(),
            tools: model.tools.clone(),
            facets: &model.facets,
        }
    }
}

/// One design variant with its profile.
#[derive(Debug, Clone, Serialize)]
pub struct DesignEntry {
    /// Variant key.
    pub key: ViewVariant,
    /// Display name.
    pub name: &'static str,
    /// Whether this is the configured default.
    pub default: bool,
    /// Behavioral profile.
    pub capabilities: ViewCapabilities,
    /// Visual theme.
    pub theme: Theme,
}

/// Lists every design variant in switcher order.
#[must_use]
pub fn design_entries(default: ViewVariant) -> Vec<DesignEntry> {
    ViewVariant::ALL
        .into_iter()
        .map(|variant| DesignEntry {
            key: variant,
            name: variant.display_name(),
            default: variant == default,
            capabilities: capabilities(variant),
            theme: theme(variant),
        })
        .collect()
}

/// Error body for JSON endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Stable error kind.
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ErrorBody {
    /// Creates an error body.
    #[must_use]
    pub fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }
}
