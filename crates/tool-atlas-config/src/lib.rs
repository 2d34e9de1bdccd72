// crates/tool-atlas-config/src/lib.rs
// ============================================================================
// Module: Tool Atlas Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for tool-atlas.toml semantics.
// Dependencies: tool-atlas-core, serde, toml
// ============================================================================

//! ## Overview
//! `tool-atlas-config` defines the configuration model for the Tool Atlas
//! display server and CLI. Loading is strict and fail-closed: unknown keys,
//! oversized files, and out-of-range limits are rejected before any socket
//! is bound.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
