// crates/tool-atlas-config/tests/config_load.rs
// ============================================================================
// Module: Config Loading Tests
// Description: File-based loading, resolution, and rejection paths.
// Purpose: Ensure tool-atlas.toml loading fails closed on bad input.
// ============================================================================

//! Integration tests for configuration loading.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::fs;

use tempfile::TempDir;
use tool_atlas_config::ConfigError;
use tool_atlas_config::ToolAtlasConfig;
use tool_atlas_config::config_toml_example;
use tool_atlas_core::Locale;
use tool_atlas_core::ViewVariant;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("tool-atlas.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn explicit_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[server]
bind = "127.0.0.1:9090"

[display]
default_design = "notion"
default_locale = "es"

[audit]
enabled = false
"#,
    );
    let config = ToolAtlasConfig::load(Some(&path)).unwrap();
    assert_eq!(config.server.bind, "127.0.0.1:9090");
    assert_eq!(config.server.max_query_bytes, 4096);
    assert_eq!(config.display.default_design, ViewVariant::Notion);
    assert_eq!(config.display.default_locale, Locale::Es);
    assert!(!config.audit.enabled);
    assert_eq!(config.source_path.as_deref(), Some(path.as_path()));
}

#[test]
fn missing_explicit_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(ToolAtlasConfig::load(Some(&path)), Err(ConfigError::Io(_))));
}

#[test]
fn unknown_design_fails_parsing() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[display]\ndefault_design = \"retro\"\n");
    assert!(matches!(ToolAtlasConfig::load(Some(&path)), Err(ConfigError::Parse(_))));
}

#[test]
fn unknown_keys_fail_parsing() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server]\nport = 80\n");
    assert!(matches!(ToolAtlasConfig::load(Some(&path)), Err(ConfigError::Parse(_))));
}

#[test]
fn malformed_bind_is_invalid() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server]\nbind = \"localhost\"\n");
    assert!(matches!(ToolAtlasConfig::load(Some(&path)), Err(ConfigError::Invalid(_))));
}

#[test]
fn oversized_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let padding = "#".repeat(128 * 1024);
    let path = write_config(&dir, &padding);
    assert!(matches!(ToolAtlasConfig::load(Some(&path)), Err(ConfigError::Invalid(_))));
}

#[test]
fn non_utf8_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tool-atlas.toml");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    assert!(matches!(ToolAtlasConfig::load(Some(&path)), Err(ConfigError::Invalid(_))));
}

#[test]
fn example_config_matches_defaults() {
    let config = ToolAtlasConfig::from_toml(&config_toml_example()).unwrap();
    assert_eq!(config, ToolAtlasConfig::default());
}
