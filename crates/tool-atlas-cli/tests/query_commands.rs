// crates/tool-atlas-cli/tests/query_commands.rs
// ============================================================================
// Module: CLI Query Command Tests
// Description: Integration tests for list, show, facets, designs, and render.
// Purpose: Ensure terminal queries follow the same pipeline as the pages.
// Dependencies: tool-atlas-cli binary, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Runs the CLI binary against the built-in catalog and checks text and JSON
//! output, localized labels, and failure messages.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use serde_json::Value;
use tempfile::tempdir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn tool_atlas_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tool-atlas"))
}

fn run(args: &[&str]) -> Output {
    Command::new(tool_atlas_bin())
        .args(args)
        .env_remove("TOOL_ATLAS_LANG")
        .env_remove("TOOL_ATLAS_CONFIG")
        .output()
        .expect("run tool-atlas")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn json_of(output: &Output) -> Value {
    serde_json::from_str(&stdout_of(output)).expect("json stdout")
}

fn ids(payload: &Value) -> Vec<String> {
    payload["tools"]
        .as_array()
        .expect("tools array")
        .iter()
        .map(|tool| tool["id"].as_str().expect("id").to_string())
        .collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Listing without filters prints every tool and a summary.
#[test]
fn cli_list_prints_every_tool() {
    let stdout = stdout_of(&run(&["list"]));
    assert!(stdout.lines().any(|line| line.starts_with("zapier")));
    assert!(stdout.contains("18 tools"), "unexpected stdout: {stdout}");
}

/// JSON listing filters and orders like the API.
#[test]
fn cli_list_json_filters_and_orders() {
    let payload = json_of(&run(&["list", "--tier", "tier1", "--format", "json"]));
    assert_eq!(payload["count"], 6);

    let payload = json_of(&run(&["list", "--tier", "untiered", "--format", "json"]));
    assert_eq!(ids(&payload), vec!["lindy", "runway", "replit-agent"]);

    let payload = json_of(&run(&[
        "list",
        "--design",
        "bento",
        "--category",
        "automation",
        "--format",
        "json",
    ]));
    assert_eq!(ids(&payload), vec!["zapier", "make", "n8n"]);
    assert_eq!(payload["design"], "bento");
}

/// Unknown filter values match nothing rather than everything.
#[test]
fn cli_list_unknown_filter_matches_nothing() {
    let stdout = stdout_of(&run(&["list", "--category", "quantum"]));
    assert!(stdout.contains("No tools match these filters."), "unexpected stdout: {stdout}");
}

/// Search follows the selected language.
#[test]
fn cli_list_searches_selected_language() {
    let spanish = stdout_of(&run(&["--lang", "es", "list", "-q", "aplicaciones"]));
    assert!(spanish.lines().any(|line| line.starts_with("zapier")));
    let english = stdout_of(&run(&["list", "-q", "aplicaciones"]));
    assert!(english.contains("No tools match these filters."));
}

/// Unknown designs are rejected with the accepted keys.
#[test]
fn cli_list_rejects_unknown_design() {
    let output = run(&["list", "--design", "holographic"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown design 'holographic'"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("linear"));
}

/// Show prints localized details and the pricing placeholder.
#[test]
fn cli_show_prints_details() {
    let stdout = stdout_of(&run(&["show", "zapier"]));
    assert!(stdout.starts_with("Zapier (zapier)"), "unexpected stdout: {stdout}");
    assert!(stdout.contains("Route new leads to the CRM"));
    assert!(stdout.contains("Website: https://zapier.com"));
    assert!(stdout.contains("+1"));

    let stdout = stdout_of(&run(&["show", "notebooklm"]));
    assert!(stdout.contains("Contact for pricing"));

    let stdout = stdout_of(&run(&["--lang", "es", "show", "zapier"]));
    assert!(stdout.contains("Conecta miles de aplicaciones"));
    assert!(stdout.contains("Sitio web: https://zapier.com"));
}

/// Show emits the raw record as JSON.
#[test]
fn cli_show_json_returns_record() {
    let payload = json_of(&run(&["show", "cursor", "--format", "json"]));
    assert_eq!(payload["name"], "Cursor");
    assert_eq!(payload["category"], "development");
}

/// Unknown tools fail with a localized message.
#[test]
fn cli_show_reports_unknown_tool() {
    let output = run(&["show", "nope"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown tool: nope"));

    let output = run(&["--lang", "es", "show", "nope"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Herramienta desconocida: nope"));
}

/// Facet counts cover the full catalog.
#[test]
fn cli_facets_counts_catalog() {
    let payload = json_of(&run(&["facets", "--format", "json"]));
    assert_eq!(payload["total"], 18);
    assert_eq!(payload["untiered"], 3);
    assert_eq!(payload["categories"]["automation"], 3);

    let stdout = stdout_of(&run(&["facets"]));
    assert!(stdout.contains("Total: 18 tools"));
    assert!(stdout.lines().any(|line| line.contains("Unranked") && line.ends_with('3')));
}

/// Designs list every variant and mark the configured default.
#[test]
fn cli_designs_marks_default() {
    let stdout = stdout_of(&run(&["designs"]));
    assert_eq!(stdout.lines().count(), 11);
    let default_line = stdout.lines().find(|line| line.ends_with("(default)")).expect("default");
    assert!(default_line.starts_with("linear"));

    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("tool-atlas.toml");
    fs::write(&config, "[display]\ndefault_design = \"notion\"\n").expect("write config");
    let payload = json_of(&run(&[
        "designs",
        "--config",
        config.to_string_lossy().as_ref(),
        "--format",
        "json",
    ]));
    let defaults: Vec<&Value> = payload
        .as_array()
        .expect("array")
        .iter()
        .filter(|entry| entry["default"] == true)
        .collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0]["key"], "notion");
}

/// Render writes the page for a query string.
#[test]
fn cli_render_writes_page() {
    let stdout = stdout_of(&run(&["render", "--query", "design=bento&category=agents"]));
    assert!(stdout.starts_with("<!doctype html>"));
    assert!(stdout.contains("variant-bento"));

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("page.html");
    let output = run(&[
        "render",
        "--query",
        "?design=notion&lang=es",
        "--output",
        path.to_string_lossy().as_ref(),
    ]);
    assert!(output.status.success());
    let html = fs::read_to_string(&path).expect("page");
    assert!(html.contains("variant-notion"));
    assert!(html.contains("<html lang=\"es\">"));
}

/// Version and language selection.
#[test]
fn cli_version_and_invalid_language_env() {
    let stdout = stdout_of(&run(&["--version"]));
    assert!(stdout.starts_with("tool-atlas "));

    let output = Command::new(tool_atlas_bin())
        .arg("list")
        .env("TOOL_ATLAS_LANG", "klingon")
        .output()
        .expect("run tool-atlas");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("TOOL_ATLAS_LANG"));
}
