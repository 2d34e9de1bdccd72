// crates/tool-atlas-core/src/runtime/mod.rs
// ============================================================================
// Module: Tool Atlas Runtime
// Description: Selection pipeline, facet counts, and expansion state.
// Purpose: Shared, pure helpers every design variant renders through.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Runtime helpers are synchronous and side-effect free. They borrow catalog
//! records and return ordered views over them.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod expansion;
pub mod facets;
pub mod pipeline;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use expansion::ExpansionState;
pub use expansion::FocusState;
pub use expansion::SectionExpansion;
pub use facets::FacetCounts;
pub use pipeline::AxisFilter;
pub use pipeline::CategoryGroup;
pub use pipeline::Selection;
pub use pipeline::SortOrder;
pub use pipeline::TierFilter;
pub use pipeline::apply;
pub use pipeline::filter;
pub use pipeline::group_by_category;
pub use pipeline::sort_by_tier;
