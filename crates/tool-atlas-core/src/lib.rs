// crates/tool-atlas-core/src/lib.rs
// ============================================================================
// Module: Tool Atlas Core Library
// Description: Public API surface for the Tool Atlas catalog core.
// Purpose: Expose catalog types, the embedded catalog, and runtime helpers.
// Dependencies: crate::{catalog, core, runtime}
// ============================================================================

//! ## Overview
//! Tool Atlas core owns the AI tool catalog: its schema, the validated
//! embedded dataset, and the filter/sort/group pipeline every design variant
//! renders through. It performs no I/O beyond reading the compiled-in data.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use catalog::Catalog;
pub use catalog::CatalogError;
pub use runtime::AxisFilter;
pub use runtime::CategoryGroup;
pub use runtime::ExpansionState;
pub use runtime::FacetCounts;
pub use runtime::FocusState;
pub use runtime::SectionExpansion;
pub use runtime::Selection;
pub use runtime::SortOrder;
pub use runtime::TierFilter;
