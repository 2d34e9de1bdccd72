// crates/tool-atlas-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and `config example`.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The example mirrors the built-in defaults so a copied file changes
//! nothing until edited.

/// Returns a canonical example `tool-atlas.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[server]
bind = "127.0.0.1:8080"
max_query_bytes = 4096

[display]
default_design = "linear"
default_locale = "en"

[audit]
enabled = true
# path = "tool-atlas-audit.jsonl"
"#,
    )
}
