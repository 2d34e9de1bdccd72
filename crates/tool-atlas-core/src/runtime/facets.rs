// crates/tool-atlas-core/src/runtime/facets.rs
// ============================================================================
// Module: Facet Counts
// Description: Per-value tool counts for each classification axis.
// Purpose: Label filter controls with how many tools each choice selects.
// Dependencies: serde, crate::core
// ============================================================================

//! ## Overview
//! Each count is taken over the full catalog restricted by that single axis
//! value. Counts therefore do not change when another axis is selected.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::Category;
use crate::core::Level;
use crate::core::Tier;
use crate::core::Tool;

/// Tool counts per category, tier, and level.
///
/// # Invariants
/// - Every enumeration member has an entry, including zero counts.
/// - `untiered + sum(tiers) == total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    /// Number of tools counted.
    pub total: usize,
    /// Tools per category.
    pub categories: BTreeMap<Category, usize>,
    /// Tools per tier.
    pub tiers: BTreeMap<Tier, usize>,
    /// Tools without a tier.
    pub untiered: usize,
    /// Tools per level.
    pub levels: BTreeMap<Level, usize>,
}

impl FacetCounts {
    /// Counts every axis value over `tools`.
    #[must_use]
    pub fn from_tools(tools: &[Tool]) -> Self {
        let mut categories: BTreeMap<Category, usize> =
            Category::ALL.into_iter().map(|category| (category, 0)).collect();
        let mut tiers: BTreeMap<Tier, usize> = Tier::ALL.into_iter().map(|tier| (tier, 0)).collect();
        let mut levels: BTreeMap<Level, usize> =
            Level::ALL.into_iter().map(|level| (level, 0)).collect();
        let mut untiered = 0;
        for tool in tools {
            *categories.entry(tool.category).or_default() += 1;
            *levels.entry(tool.level).or_default() += 1;
            match tool.tier {
                Some(tier) => *tiers.entry(tier).or_default() += 1,
                None => untiered += 1,
            }
        }
        Self {
            total: tools.len(),
            categories,
            tiers,
            untiered,
            levels,
        }
    }

    /// Returns the count for a category.
    #[must_use]
    pub fn category(&self, category: Category) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    /// Returns the count for a tier.
    #[must_use]
    pub fn tier(&self, tier: Tier) -> usize {
        self.tiers.get(&tier).copied().unwrap_or(0)
    }

    /// Returns the count for a level.
    #[must_use]
    pub fn level(&self, level: Level) -> usize {
        self.levels.get(&level).copied().unwrap_or(0)
    }
}
