// crates/tool-atlas-core/src/core/identifiers.rs
// ============================================================================
// Module: Tool Atlas Identifiers
// Description: Canonical opaque identifiers for catalog entries.
// Purpose: Provide a strongly typed, serializable tool identifier.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Tool identifiers are opaque strings that serve as both the rendering key
//! and the lookup key for a catalog entry. They serialize as plain strings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Borrow;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Tool identifier for a catalog entry.
///
/// # Invariants
/// - Opaque UTF-8 string; uniqueness is enforced by the catalog loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    /// Creates a new tool identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for ToolId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToolId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ToolId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
