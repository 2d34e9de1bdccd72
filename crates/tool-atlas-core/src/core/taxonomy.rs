// crates/tool-atlas-core/src/core/taxonomy.rs
// ============================================================================
// Module: Catalog Taxonomy
// Description: Closed enumerations for category, level, tier, and department.
// Purpose: Keep every classification value inside a compile-time checked set.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Catalog entries are classified along four closed axes. Each enumeration
//! exposes a stable wire label (`as_str`), a tolerant parser for boundary
//! inputs (`parse`), and an `ALL` slice whose order is the display order.
//!
//! ## Invariants
//! - Wire labels are stable; they appear in the data file and query strings.
//! - `ALL` lists every variant exactly once.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Category
// ============================================================================

/// Purpose classification of a tool.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Workflow and process automation.
    Automation,
    /// Autonomous and semi-autonomous agents.
    Agents,
    /// Research, knowledge management, and search.
    Knowledge,
    /// Content, design, and media creation.
    Creativity,
    /// No-code app and site builders.
    NoCode,
    /// Software development assistants.
    Development,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 6] = [
        Self::Automation,
        Self::Agents,
        Self::Knowledge,
        Self::Creativity,
        Self::NoCode,
        Self::Development,
    ];

    /// Returns the stable wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automation => "automation",
            Self::Agents => "agents",
            Self::Knowledge => "knowledge",
            Self::Creativity => "creativity",
            Self::NoCode => "no_code",
            Self::Development => "development",
        }
    }

    /// Parses a wire label (case-insensitive, `-` accepted for `_`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = normalize_label(value);
        Self::ALL.into_iter().find(|category| category.as_str() == normalized)
    }

    /// Returns the position of the category in display order.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Automation => 0,
            Self::Agents => 1,
            Self::Knowledge => 2,
            Self::Creativity => 3,
            Self::NoCode => 4,
            Self::Development => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Level
// ============================================================================

/// Skill level required to get value from a tool.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Usable without prior experience.
    Beginner,
    /// Requires some configuration or domain knowledge.
    Intermediate,
    /// Requires technical expertise.
    Advanced,
}

impl Level {
    /// Every level in display order.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Returns the stable wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parses a wire label (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = normalize_label(value);
        Self::ALL.into_iter().find(|level| level.as_str() == normalized)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tier
// ============================================================================

/// Recommendation tier; `Tier1` is the most recommended.
///
/// # Invariants
/// - Tools without a tier rank after every tiered tool (see [`tier_rank`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Strongest recommendation.
    Tier1,
    /// Solid alternative.
    Tier2,
    /// Niche or situational pick.
    Tier3,
}

impl Tier {
    /// Every tier in rank order.
    pub const ALL: [Self; 3] = [Self::Tier1, Self::Tier2, Self::Tier3];

    /// Returns the stable wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tier1 => "tier1",
            Self::Tier2 => "tier2",
            Self::Tier3 => "tier3",
        }
    }

    /// Parses a wire label (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = normalize_label(value);
        Self::ALL.into_iter().find(|tier| tier.as_str() == normalized)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank used for ordering: tier1 = 0, tier2 = 1, tier3 = 2, untiered = 3.
#[must_use]
pub const fn tier_rank(tier: Option<Tier>) -> u8 {
    match tier {
        Some(Tier::Tier1) => 0,
        Some(Tier::Tier2) => 1,
        Some(Tier::Tier3) => 2,
        None => 3,
    }
}

// ============================================================================
// SECTION: Department
// ============================================================================

/// Organizational department a tool is useful for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    /// Marketing and communications.
    Marketing,
    /// Sales and business development.
    Sales,
    /// Operations and administration.
    Operations,
    /// People and talent.
    People,
    /// Finance and accounting.
    Finance,
    /// Engineering and IT.
    Engineering,
    /// Customer support.
    Support,
    /// Leadership and strategy.
    Leadership,
}

impl Department {
    /// Every department in display order.
    pub const ALL: [Self; 8] = [
        Self::Marketing,
        Self::Sales,
        Self::Operations,
        Self::People,
        Self::Finance,
        Self::Engineering,
        Self::Support,
        Self::Leadership,
    ];

    /// Returns the stable wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marketing => "marketing",
            Self::Sales => "sales",
            Self::Operations => "operations",
            Self::People => "people",
            Self::Finance => "finance",
            Self::Engineering => "engineering",
            Self::Support => "support",
            Self::Leadership => "leadership",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Lowercases and trims a boundary label, mapping `-` to `_`.
fn normalize_label(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace('-', "_")
}
