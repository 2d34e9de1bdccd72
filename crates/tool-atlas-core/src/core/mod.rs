// crates/tool-atlas-core/src/core/mod.rs
// ============================================================================
// Module: Tool Atlas Core Types
// Description: Canonical catalog schema and taxonomy structures.
// Purpose: Provide stable, serializable types for catalog entries and labels.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define catalog entries, their closed classification axes, the
//! per-locale value containers, the label lookup tables, and the closed set
//! of design variants. These types are the canonical source of truth for
//! every rendered surface (HTML, JSON, CLI).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identifiers;
pub mod labels;
pub mod locale;
pub mod taxonomy;
pub mod tool;
pub mod variant;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::ToolId;
pub use locale::Locale;
pub use locale::Localized;
pub use locale::LocalizedList;
pub use locale::LocalizedText;
pub use locale::SUPPORTED_LOCALES;
pub use taxonomy::Category;
pub use taxonomy::Department;
pub use taxonomy::Level;
pub use taxonomy::Tier;
pub use taxonomy::tier_rank;
pub use tool::DepartmentPreview;
pub use tool::PriceTier;
pub use tool::Tool;
pub use tool::fold_case;
pub use variant::ViewVariant;
