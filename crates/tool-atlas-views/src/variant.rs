// crates/tool-atlas-views/src/variant.rs
// ============================================================================
// Module: Variant Profiles
// Description: Capabilities and theme for each design variant.
// Purpose: Map the closed variant set to one renderer configuration.
// Dependencies: tool-atlas-core, serde
// ============================================================================

//! ## Overview
//! Every variant renders through the same pipeline and the same renderer.
//! What differs is captured here: which filter controls appear, how results
//! are ordered and laid out, which expansion pattern applies, and the visual
//! theme. Both tables are exhaustive matches over [`ViewVariant`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use tool_atlas_core::SortOrder;
use tool_atlas_core::ViewVariant;

// ============================================================================
// SECTION: Capabilities
// ============================================================================

/// How the category axis is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryControl {
    /// No category control.
    Hidden,
    /// Tabs with no "all" option; the first category is preselected.
    Tabs,
    /// Chips including an "all" option.
    Chips,
}

/// How the tier axis is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierControl {
    /// No tier control.
    Hidden,
    /// One chip per tier.
    Tiers,
    /// One chip per tier plus an "unranked" chip.
    TiersWithUntiered,
}

/// Result layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Card grid.
    Cards,
    /// Table with expandable rows.
    Table,
    /// List with a side detail panel.
    MasterDetail,
    /// Tile mosaic with a focused tile.
    Tiles,
    /// Compact one-line rows.
    Rows,
    /// Collapsible category sections.
    Sections,
}

impl Layout {
    /// Returns the stable layout key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Table => "table",
            Self::MasterDetail => "master_detail",
            Self::Tiles => "tiles",
            Self::Rows => "rows",
            Self::Sections => "sections",
        }
    }
}

/// Expand/collapse pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionMode {
    /// Items expand independently.
    PerItem,
    /// One focused item at a time.
    Focus,
    /// Sections expand independently; items inside expand independently.
    SectionsAndItems,
}

/// Behavioral profile of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewCapabilities {
    /// Category control.
    pub category: CategoryControl,
    /// Tier control.
    pub tier: TierControl,
    /// Whether a level control is shown.
    pub level: bool,
    /// Whether a search box is shown.
    pub search: bool,
    /// Whether facet counts are shown next to filter options.
    pub facet_counts: bool,
    /// Result ordering.
    pub order: SortOrder,
    /// Result layout.
    pub layout: Layout,
    /// Expansion pattern.
    pub expansion: ExpansionMode,
    /// Whether the list/grid switch is offered.
    pub layout_switch: bool,
}

/// Returns the behavioral profile for `variant`.
#[must_use]
pub const fn capabilities(variant: ViewVariant) -> ViewCapabilities {
    match variant {
        ViewVariant::Catalog => ViewCapabilities {
            category: CategoryControl::Tabs,
            tier: TierControl::Hidden,
            level: false,
            search: false,
            facet_counts: false,
            order: SortOrder::Catalog,
            layout: Layout::Cards,
            expansion: ExpansionMode::PerItem,
            layout_switch: false,
        },
        ViewVariant::Dashboard => ViewCapabilities {
            category: CategoryControl::Chips,
            tier: TierControl::Hidden,
            level: true,
            search: false,
            facet_counts: false,
            order: SortOrder::Catalog,
            layout: Layout::Table,
            expansion: ExpansionMode::Focus,
            layout_switch: false,
        },
        ViewVariant::Explorer => ViewCapabilities {
            category: CategoryControl::Chips,
            tier: TierControl::Hidden,
            level: true,
            search: true,
            facet_counts: false,
            order: SortOrder::Catalog,
            layout: Layout::MasterDetail,
            expansion: ExpansionMode::Focus,
            layout_switch: false,
        },
        ViewVariant::Bento => ViewCapabilities {
            category: CategoryControl::Chips,
            tier: TierControl::TiersWithUntiered,
            level: false,
            search: false,
            facet_counts: true,
            order: SortOrder::TierRank,
            layout: Layout::Tiles,
            expansion: ExpansionMode::Focus,
            layout_switch: false,
        },
        ViewVariant::Brutalist | ViewVariant::Dark | ViewVariant::Gradient => ViewCapabilities {
            category: CategoryControl::Chips,
            tier: TierControl::Tiers,
            level: false,
            search: false,
            facet_counts: true,
            order: SortOrder::TierRank,
            layout: Layout::Cards,
            expansion: ExpansionMode::PerItem,
            layout_switch: false,
        },
        ViewVariant::Minimal => ViewCapabilities {
            category: CategoryControl::Chips,
            tier: TierControl::Tiers,
            level: false,
            search: false,
            facet_counts: true,
            order: SortOrder::TierRank,
            layout: Layout::Rows,
            expansion: ExpansionMode::PerItem,
            layout_switch: true,
        },
        ViewVariant::Notion => ViewCapabilities {
            category: CategoryControl::Hidden,
            tier: TierControl::Tiers,
            level: false,
            search: true,
            facet_counts: false,
            order: SortOrder::TierRank,
            layout: Layout::Sections,
            expansion: ExpansionMode::SectionsAndItems,
            layout_switch: false,
        },
        ViewVariant::Apple => ViewCapabilities {
            category: CategoryControl::Chips,
            tier: TierControl::TiersWithUntiered,
            level: false,
            search: false,
            facet_counts: true,
            order: SortOrder::TierRank,
            layout: Layout::Cards,
            expansion: ExpansionMode::PerItem,
            layout_switch: false,
        },
        ViewVariant::Linear => ViewCapabilities {
            category: CategoryControl::Chips,
            tier: TierControl::Tiers,
            level: false,
            search: true,
            facet_counts: true,
            order: SortOrder::TierRank,
            layout: Layout::Rows,
            expansion: ExpansionMode::PerItem,
            layout_switch: false,
        },
    }
}

// ============================================================================
// SECTION: Theme
// ============================================================================

/// Card surface treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStyle {
    /// Bordered flat card.
    Outlined,
    /// Raised card with soft shadow.
    Elevated,
    /// Thick borders and hard shadow.
    Blocky,
    /// Gradient background.
    Gradient,
    /// No card chrome.
    Bare,
}

/// Badge treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStyle {
    /// Rounded pill.
    Pill,
    /// Square tag.
    Tag,
    /// Plain text.
    Text,
}

/// Page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Light background.
    Light,
    /// Dark background.
    Dark,
    /// Black on white, high contrast.
    Contrast,
    /// Saturated accents.
    Vivid,
}

/// Visual theme of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Card treatment.
    pub card: CardStyle,
    /// Badge treatment.
    pub badge: BadgeStyle,
    /// Color scheme.
    pub scheme: ColorScheme,
}

impl CardStyle {
    /// Returns the CSS class suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outlined => "outlined",
            Self::Elevated => "elevated",
            Self::Blocky => "blocky",
            Self::Gradient => "gradient",
            Self::Bare => "bare",
        }
    }
}

impl BadgeStyle {
    /// Returns the CSS class suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pill => "pill",
            Self::Tag => "tag",
            Self::Text => "text",
        }
    }
}

impl ColorScheme {
    /// Returns the CSS class suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Contrast => "contrast",
            Self::Vivid => "vivid",
        }
    }
}

/// Returns the theme for `variant`.
#[must_use]
pub const fn theme(variant: ViewVariant) -> Theme {
    let (card, badge, scheme) = match variant {
        ViewVariant::Catalog => (CardStyle::Outlined, BadgeStyle::Pill, ColorScheme::Light),
        ViewVariant::Dashboard => (CardStyle::Bare, BadgeStyle::Tag, ColorScheme::Light),
        ViewVariant::Explorer => (CardStyle::Outlined, BadgeStyle::Tag, ColorScheme::Light),
        ViewVariant::Bento => (CardStyle::Elevated, BadgeStyle::Pill, ColorScheme::Light),
        ViewVariant::Brutalist => (CardStyle::Blocky, BadgeStyle::Tag, ColorScheme::Contrast),
        ViewVariant::Dark => (CardStyle::Outlined, BadgeStyle::Pill, ColorScheme::Dark),
        ViewVariant::Gradient => (CardStyle::Gradient, BadgeStyle::Pill, ColorScheme::Vivid),
        ViewVariant::Minimal => (CardStyle::Bare, BadgeStyle::Text, ColorScheme::Light),
        ViewVariant::Notion => (CardStyle::Bare, BadgeStyle::Tag, ColorScheme::Light),
        ViewVariant::Apple => (CardStyle::Elevated, BadgeStyle::Pill, ColorScheme::Light),
        ViewVariant::Linear => (CardStyle::Bare, BadgeStyle::Pill, ColorScheme::Dark),
    };
    Theme {
        card,
        badge,
        scheme,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use tool_atlas_core::SortOrder;
    use tool_atlas_core::ViewVariant;

    use super::CategoryControl;
    use super::ExpansionMode;
    use super::Layout;
    use super::TierControl;
    use super::capabilities;

    #[test]
    fn tier_aware_variants_sort_by_tier() {
        for variant in ViewVariant::ALL {
            let caps = capabilities(variant);
            if caps.tier != TierControl::Hidden {
                assert_eq!(caps.order, SortOrder::TierRank, "{variant}");
            }
        }
        assert_eq!(capabilities(ViewVariant::Catalog).order, SortOrder::Catalog);
    }

    #[test]
    fn expansion_mode_matches_layout() {
        for variant in ViewVariant::ALL {
            let caps = capabilities(variant);
            let expected = match caps.layout {
                Layout::Table | Layout::MasterDetail | Layout::Tiles => ExpansionMode::Focus,
                Layout::Sections => ExpansionMode::SectionsAndItems,
                Layout::Cards | Layout::Rows => ExpansionMode::PerItem,
            };
            assert_eq!(caps.expansion, expected, "{variant}");
        }
    }

    #[test]
    fn tabs_and_layout_switch_are_unique() {
        let tabs: Vec<ViewVariant> = ViewVariant::ALL
            .into_iter()
            .filter(|variant| capabilities(*variant).category == CategoryControl::Tabs)
            .collect();
        assert_eq!(tabs, vec![ViewVariant::Catalog]);
        let switches: Vec<ViewVariant> = ViewVariant::ALL
            .into_iter()
            .filter(|variant| capabilities(*variant).layout_switch)
            .collect();
        assert_eq!(switches, vec![ViewVariant::Minimal]);
    }
}
