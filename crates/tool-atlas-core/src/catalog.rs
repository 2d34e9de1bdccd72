// crates/tool-atlas-core/src/catalog.rs
// ============================================================================
// Module: Tool Catalog
// Description: Embedded, validated, read-only collection of tool records.
// Purpose: Load the catalog once and fail fast on data-authoring defects.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The built-in catalog is compiled into the binary from `data/tools.json`
//! and parsed on first use. Loading validates the invariants the type system
//! cannot express: unique identifiers and non-empty text for every locale.
//!
//! ## Invariants
//! - A loaded [`Catalog`] is never mutated.
//! - Catalog order is the authoring order and is the tie-break for sorting.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::sync::OnceLock;

use thiserror::Error;

use crate::core::Locale;
use crate::core::LocalizedList;
use crate::core::LocalizedText;
use crate::core::Tool;
use crate::core::ToolId;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Embedded catalog data.
const BUILTIN_CATALOG_JSON: &str = include_str!("../data/tools.json");

/// Maximum accepted catalog payload size in bytes.
pub const MAX_CATALOG_BYTES: usize = 4 * 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Catalog payload exceeds [`MAX_CATALOG_BYTES`].
    #[error("catalog payload exceeds {MAX_CATALOG_BYTES} bytes")]
    TooLarge,
    /// Catalog JSON could not be parsed into tool records.
    #[error("catalog parse error: {0}")]
    Parse(String),
    /// Two records share the same identifier.
    #[error("duplicate tool id: {0}")]
    DuplicateId(ToolId),
    /// A required locale-independent field is blank.
    #[error("tool {tool}: field {field} must be non-empty")]
    EmptyField {
        /// Offending tool.
        tool: ToolId,
        /// Field name.
        field: &'static str,
    },
    /// A localized field is blank for one locale.
    #[error("tool {tool}: field {field} is missing text for locale {locale}")]
    MissingLocale {
        /// Offending tool.
        tool: ToolId,
        /// Field name.
        field: &'static str,
        /// Locale with no text.
        locale: Locale,
    },
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Validated, ordered collection of tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Tools in authoring order.
    tools: Vec<Tool>,
}

impl Catalog {
    /// Returns the process-wide built-in catalog, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the embedded data is invalid.
    pub fn builtin() -> Result<&'static Self, CatalogError> {
        static BUILTIN: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::from_json(BUILTIN_CATALOG_JSON)).as_ref().map_err(Clone::clone)
    }

    /// Parses and validates a catalog from JSON (an array of tool records).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when parsing or validation fails.
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        if payload.len() > MAX_CATALOG_BYTES {
            return Err(CatalogError::TooLarge);
        }
        let tools: Vec<Tool> =
            serde_json::from_str(payload).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::from_tools(tools)
    }

    /// Builds a catalog from in-memory records after validating them.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when validation fails.
    pub fn from_tools(tools: Vec<Tool>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for tool in &tools {
            if !seen.insert(tool.id.as_str()) {
                return Err(CatalogError::DuplicateId(tool.id.clone()));
            }
            validate_tool(tool)?;
        }
        Ok(Self {
            tools,
        })
    }

    /// Returns every tool in catalog order.
    #[must_use]
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Looks up a tool by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id.as_str() == id)
    }

    /// Returns the number of tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true when the catalog holds no tools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates a single record's text fields.
fn validate_tool(tool: &Tool) -> Result<(), CatalogError> {
    require_non_empty(tool, "id", tool.id.as_str())?;
    require_non_empty(tool, "name", &tool.name)?;
    require_non_empty(tool, "url", &tool.url)?;
    require_text(tool, "short_description", &tool.short_description)?;
    require_text(tool, "description", &tool.description)?;
    require_list(tool, "use_cases", &tool.use_cases)?;
    require_list(tool, "highlights", &tool.highlights)?;
    for tier in &tool.pricing {
        require_non_empty(tool, "pricing.plan", &tier.plan)?;
        require_non_empty(tool, "pricing.price", &tier.price)?;
        require_text(tool, "pricing.features", &tier.features)?;
    }
    Ok(())
}

/// Rejects blank locale-independent strings.
fn require_non_empty(tool: &Tool, field: &'static str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::EmptyField {
            tool: tool.id.clone(),
            field,
        });
    }
    Ok(())
}

/// Rejects localized text that is blank for any locale.
fn require_text(
    tool: &Tool,
    field: &'static str,
    value: &LocalizedText,
) -> Result<(), CatalogError> {
    for (locale, text) in value.iter() {
        if text.trim().is_empty() {
            return Err(CatalogError::MissingLocale {
                tool: tool.id.clone(),
                field,
                locale,
            });
        }
    }
    Ok(())
}

/// Rejects localized lists that are empty or contain blank items for any locale.
fn require_list(
    tool: &Tool,
    field: &'static str,
    value: &LocalizedList,
) -> Result<(), CatalogError> {
    for (locale, items) in value.iter() {
        if items.is_empty() || items.iter().any(|item| item.trim().is_empty()) {
            return Err(CatalogError::MissingLocale {
                tool: tool.id.clone(),
                field,
                locale,
            });
        }
    }
    Ok(())
}
