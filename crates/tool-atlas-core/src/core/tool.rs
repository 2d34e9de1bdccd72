// crates/tool-atlas-core/src/core/tool.rs
// ============================================================================
// Module: Tool Records
// Description: Catalog entry and pricing tier structures.
// Purpose: Define the canonical, serializable shape of one catalog entry.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Tool`] describes one external AI product. Records are immutable once
//! the catalog is loaded; display helpers derive summaries (starting price,
//! price range, department preview) without mutating the record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ToolId;
use crate::core::locale::Locale;
use crate::core::locale::LocalizedList;
use crate::core::locale::LocalizedText;
use crate::core::taxonomy::Category;
use crate::core::taxonomy::Department;
use crate::core::taxonomy::Level;
use crate::core::taxonomy::Tier;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One pricing plan for a tool.
///
/// # Invariants
/// - `price` is display text (for example `"$20/mo"`); it is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceTier {
    /// Plan name (locale-independent, e.g. `"Pro"`).
    pub plan: String,
    /// Price display text.
    pub price: String,
    /// What the plan includes.
    pub features: LocalizedText,
}

/// One catalog entry.
///
/// # Invariants
/// - `id` is unique across the catalog.
/// - `pricing` order is display-significant (cheapest first by convention).
/// - Localized fields carry non-empty text for every locale once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tool {
    /// Stable identifier.
    pub id: ToolId,
    /// Display name (proper noun, locale-independent).
    pub name: String,
    /// One-line summary.
    pub short_description: LocalizedText,
    /// Full description.
    pub description: LocalizedText,
    /// Purpose classification.
    pub category: Category,
    /// Required skill level.
    pub level: Level,
    /// Recommendation tier, if ranked.
    #[serde(default)]
    pub tier: Option<Tier>,
    /// Departments the tool serves.
    #[serde(default)]
    pub departments: Vec<Department>,
    /// Pricing plans.
    #[serde(default)]
    pub pricing: Vec<PriceTier>,
    /// Example use cases.
    pub use_cases: LocalizedList,
    /// Reasons the tool is recommended.
    pub highlights: LocalizedList,
    /// External link.
    pub url: String,
}

/// First departments of a tool plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentPreview {
    /// Departments shown inline.
    pub shown: Vec<Department>,
    /// Number of departments hidden behind a "+N" marker.
    pub hidden: usize,
}

// ============================================================================
// SECTION: Display Helpers
// ============================================================================

impl Tool {
    /// Returns the price of the first plan, if any.
    #[must_use]
    pub fn starting_price(&self) -> Option<&str> {
        self.pricing.first().map(|tier| tier.price.as_str())
    }

    /// Returns `"first - last"` across plans, or the single price when equal.
    #[must_use]
    pub fn price_range(&self) -> Option<String> {
        let first = self.pricing.first()?;
        let last = self.pricing.last()?;
        if first.price == last.price {
            return Some(first.price.clone());
        }
        Some(format!("{} - {}", first.price, last.price))
    }

    /// Splits departments into the first `limit` and an overflow count.
    #[must_use]
    pub fn department_preview(&self, limit: usize) -> DepartmentPreview {
        let shown: Vec<Department> = self.departments.iter().copied().take(limit).collect();
        DepartmentPreview {
            hidden: self.departments.len().saturating_sub(shown.len()),
            shown,
        }
    }

    /// Returns true when `needle` (already passed through [`fold_case`])
    /// occurs in the name or either description for `locale`.
    #[must_use]
    pub fn matches_folded_query(&self, needle: &str, locale: Locale) -> bool {
        if needle.is_empty() {
            return true;
        }
        fold_case(&self.name).contains(needle)
            || fold_case(self.short_description.text(locale)).contains(needle)
            || fold_case(self.description.text(locale)).contains(needle)
    }
}

/// Folds `text` for case-insensitive matching.
///
/// Upper-casing first expands characters such as `ß` to `SS`, so every
/// casing of a query folds to the same string.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_uppercase().to_lowercase()
}
