// crates/tool-atlas-views/src/tests/mod.rs
// ============================================================================
// Module: View Unit Tests
// Description: Unit tests for interface catalogs and page state encoding.
// Purpose: Exercise crate-private behavior without going through HTTP.
// Dependencies: tool-atlas-views
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test fixtures use explicit asserts and unwraps for clarity."
)]
