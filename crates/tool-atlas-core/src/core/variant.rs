// crates/tool-atlas-core/src/core/variant.rs
// ============================================================================
// Module: Design Variants
// Description: Closed set of presentation variants for the catalog.
// Purpose: Give every surface one exhaustive list of selectable designs.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`ViewVariant`] names one presentation of the catalog. The set is
//! closed; the rendering crate maps each variant to its theme and
//! capabilities with exhaustive matches.
//!
//! ## Invariants
//! - [`ViewVariant::ALL`] order is the design switcher order.
//! - [`ViewVariant::default`] is [`ViewVariant::Linear`].

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Presentation variant of the tool catalog.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewVariant {
    /// Category tabs over a card grid.
    Catalog,
    /// Filterable table with a single expanded row.
    Dashboard,
    /// Search-first list with a detail panel.
    Explorer,
    /// Mosaic of tiles with a focused tile.
    Bento,
    /// High-contrast blocks.
    Brutalist,
    /// Dark cards.
    Dark,
    /// Gradient cards.
    Gradient,
    /// Sparse list or grid.
    Minimal,
    /// Collapsible category sections.
    Notion,
    /// Soft cards with an untiered filter.
    Apple,
    /// Compact rows with search.
    #[default]
    Linear,
}

impl ViewVariant {
    /// Every variant in switcher order.
    pub const ALL: [Self; 11] = [
        Self::Catalog,
        Self::Dashboard,
        Self::Explorer,
        Self::Bento,
        Self::Brutalist,
        Self::Dark,
        Self::Gradient,
        Self::Minimal,
        Self::Notion,
        Self::Apple,
        Self::Linear,
    ];

    /// Returns the stable key used in query strings and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Dashboard => "dashboard",
            Self::Explorer => "explorer",
            Self::Bento => "bento",
            Self::Brutalist => "brutalist",
            Self::Dark => "dark",
            Self::Gradient => "gradient",
            Self::Minimal => "minimal",
            Self::Notion => "notion",
            Self::Apple => "apple",
            Self::Linear => "linear",
        }
    }

    /// Returns the switcher label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Catalog => "Catalog",
            Self::Dashboard => "Dashboard",
            Self::Explorer => "Explorer",
            Self::Bento => "Bento",
            Self::Brutalist => "Brutalist",
            Self::Dark => "Dark",
            Self::Gradient => "Gradient",
            Self::Minimal => "Minimal",
            Self::Notion => "Notion",
            Self::Apple => "Apple",
            Self::Linear => "Linear",
        }
    }

    /// Parses a variant key (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|variant| variant.as_str() == normalized)
    }
}

impl fmt::Display for ViewVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_and_unknown_keys_are_rejected() {
        for variant in ViewVariant::ALL {
            assert_eq!(ViewVariant::parse(variant.as_str()), Some(variant));
        }
        assert_eq!(ViewVariant::parse(" NOTION "), Some(ViewVariant::Notion));
        assert_eq!(ViewVariant::parse("retro"), None);
        assert_eq!(ViewVariant::default(), ViewVariant::Linear);
    }
}
