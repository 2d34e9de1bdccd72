// crates/tool-atlas-cli/src/lib.rs
// ============================================================================
// Module: Tool Atlas CLI Library
// Description: Shared helpers for the Tool Atlas command-line interface.
// Purpose: Provide reusable components (i18n, serve policy) for the binary and tests.
// Dependencies: tool-atlas-core, tool-atlas-config
// ============================================================================

//! ## Overview
//! This library houses the CLI message catalog and the bind policy used by
//! `tool-atlas serve`. The binary entry point (`src/main.rs`) imports these
//! helpers to keep all user-facing output consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
/// Network exposure policy for the display server.
pub mod serve_policy;

#[cfg(test)]
mod tests;
