// crates/tool-atlas-core/src/runtime/pipeline.rs
// ============================================================================
// Module: Selection Pipeline
// Description: Filter, tier sort, and category grouping over the catalog.
// Purpose: Give every design variant one shared, deterministic result set.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! A [`Selection`] describes the active filters. [`apply`] filters the
//! catalog conjunctively, optionally sorts by tier rank, and returns borrowed
//! records in a stable order. [`group_by_category`] partitions an ordered
//! result by category for grouped layouts.
//!
//! ## Invariants
//! - Filtering is purely conjunctive; an inactive axis never excludes.
//! - Sorting is stable; ties keep catalog order.
//! - Unknown boundary values select nothing; they never produce an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::Category;
use crate::core::Level;
use crate::core::Locale;
use crate::core::Tier;
use crate::core::Tool;
use crate::core::fold_case;
use crate::core::tier_rank;

// ============================================================================
// SECTION: Axis Filters
// ============================================================================

/// Selection on one closed classification axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisFilter<T> {
    /// Axis is inactive.
    #[default]
    Any,
    /// Only values equal to `T` pass.
    Is(T),
    /// A value outside the axis was requested; nothing passes.
    Unmatched,
}

impl<T: Copy + PartialEq> AxisFilter<T> {
    /// Builds a filter from an optional boundary value.
    ///
    /// Absent or blank values are [`AxisFilter::Any`]; values `parse` rejects
    /// are [`AxisFilter::Unmatched`].
    pub fn from_param(value: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Any,
            Some(raw) => parse(raw).map_or(Self::Unmatched, Self::Is),
        }
    }

    /// Returns true when `value` passes the filter.
    #[must_use]
    pub fn matches(&self, value: T) -> bool {
        match self {
            Self::Any => true,
            Self::Is(expected) => *expected == value,
            Self::Unmatched => false,
        }
    }

    /// Returns the selected value, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<T> {
        match self {
            Self::Is(value) => Some(*value),
            Self::Any | Self::Unmatched => None,
        }
    }

    /// Returns true when the axis restricts the result.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Any)
    }
}

/// Selection on the tier axis, which also distinguishes untiered tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierFilter {
    /// Axis is inactive.
    #[default]
    Any,
    /// Only tools with this tier pass.
    Is(Tier),
    /// Only tools without a tier pass.
    Untiered,
    /// An unknown tier was requested; nothing passes.
    Unmatched,
}

impl TierFilter {
    /// Boundary label selecting untiered tools.
    pub const UNTIERED_PARAM: &'static str = "untiered";

    /// Builds a tier filter from an optional boundary value.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Any,
            Some(raw) if raw.eq_ignore_ascii_case(Self::UNTIERED_PARAM) => Self::Untiered,
            Some(raw) => Tier::parse(raw).map_or(Self::Unmatched, Self::Is),
        }
    }

    /// Returns true when a tool with `tier` passes the filter.
    #[must_use]
    pub fn matches(&self, tier: Option<Tier>) -> bool {
        match self {
            Self::Any => true,
            Self::Is(expected) => tier == Some(*expected),
            Self::Untiered => tier.is_none(),
            Self::Unmatched => false,
        }
    }

    /// Returns the boundary label for the active selection.
    #[must_use]
    pub const fn as_param(&self) -> Option<&'static str> {
        match self {
            Self::Any | Self::Unmatched => None,
            Self::Is(tier) => Some(tier.as_str()),
            Self::Untiered => Some(Self::UNTIERED_PARAM),
        }
    }

    /// Returns true when the axis restricts the result.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Any)
    }
}

// ============================================================================
// SECTION: Selection
// ============================================================================

/// Active filters for one request or render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Category filter.
    pub category: AxisFilter<Category>,
    /// Tier filter.
    pub tier: TierFilter,
    /// Skill level filter.
    pub level: AxisFilter<Level>,
    /// Free-text search as typed; only the empty string is inactive.
    pub query: String,
}

impl Selection {
    /// Returns true when any axis or the search restricts the result.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.category.is_active()
            || self.tier.is_active()
            || self.level.is_active()
            || !self.query.is_empty()
    }

    /// Returns the case-folded search needle. Whitespace is kept.
    #[must_use]
    pub fn needle(&self) -> String {
        fold_case(&self.query)
    }

    /// Returns true when `tool` passes every active predicate.
    #[must_use]
    pub fn matches(&self, tool: &Tool, locale: Locale) -> bool {
        self.matches_with_needle(tool, locale, &self.needle())
    }

    /// Predicate body shared with [`filter`], which folds the needle once.
    fn matches_with_needle(&self, tool: &Tool, locale: Locale, needle: &str) -> bool {
        self.category.matches(tool.category)
            && self.tier.matches(tool.tier)
            && self.level.matches(tool.level)
            && tool.matches_folded_query(needle, locale)
    }
}

// ============================================================================
// SECTION: Ordering
// ============================================================================

/// Result ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep catalog order.
    #[default]
    Catalog,
    /// Stable sort by tier rank, untiered last.
    TierRank,
}

/// Tools of one category, in result order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    /// Group category.
    pub category: Category,
    /// Tools in the group.
    pub tools: Vec<&'a Tool>,
}

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Returns the tools passing `selection`, in catalog order.
#[must_use]
pub fn filter<'a>(tools: &'a [Tool], selection: &Selection, locale: Locale) -> Vec<&'a Tool> {
    let needle = selection.needle();
    tools.iter().filter(|tool| selection.matches_with_needle(tool, locale, &needle)).collect()
}

/// Stable-sorts tools by tier rank.
pub fn sort_by_tier(tools: &mut [&Tool]) {
    tools.sort_by_key(|tool| tier_rank(tool.tier));
}

/// Filters and orders the catalog for a render.
#[must_use]
pub fn apply<'a>(
    tools: &'a [Tool],
    selection: &Selection,
    locale: Locale,
    order: SortOrder,
) -> Vec<&'a Tool> {
    let mut result = filter(tools, selection, locale);
    if order == SortOrder::TierRank {
        sort_by_tier(&mut result);
    }
    result
}

/// Partitions an ordered result by category, omitting empty groups.
#[must_use]
pub fn group_by_category<'a>(tools: &[&'a Tool]) -> Vec<CategoryGroup<'a>> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<&'a Tool> =
                tools.iter().copied().filter(|tool| tool.category == category).collect();
            if members.is_empty() {
                None
            } else {
                Some(CategoryGroup {
                    category,
                    tools: members,
                })
            }
        })
        .collect()
}
