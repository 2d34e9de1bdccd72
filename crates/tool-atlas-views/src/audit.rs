// crates/tool-atlas-views/src/audit.rs
// ============================================================================
// Module: Request Audit Logging
// Description: Structured audit events for display server requests.
// Purpose: Emit one JSON line per request without a logging framework.
// Dependencies: tool-atlas-config, serde
// ============================================================================

//! ## Overview
//! Each handled request produces a [`RequestAuditEvent`] that is handed to an
//! [`AuditSink`]. Sinks write JSON lines to stderr or to an append-only file,
//! or drop events entirely. Search text is never logged; only its length is.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use tool_atlas_config::AuditConfig;
use tool_atlas_core::Locale;
use tool_atlas_core::ViewVariant;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Route classification for audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditRoute {
    /// HTML page.
    Page,
    /// Filtered tool list.
    Tools,
    /// Single tool lookup.
    Tool,
    /// Variant listing.
    Designs,
}

/// Request audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct RequestAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Route that handled the request.
    pub route: AuditRoute,
    /// Resolved design variant, when the route has one.
    pub design: Option<ViewVariant>,
    /// Resolved locale.
    pub locale: Locale,
    /// HTTP status code returned.
    pub status: u16,
    /// Number of tools in the response.
    pub result_count: usize,
    /// Raw query string size in bytes.
    pub query_bytes: usize,
}

/// Inputs required to construct an audit event.
pub struct RequestAuditEventParams {
    /// Route that handled the request.
    pub route: AuditRoute,
    /// Resolved design variant.
    pub design: Option<ViewVariant>,
    /// Resolved locale.
    pub locale: Locale,
    /// HTTP status code returned.
    pub status: u16,
    /// Number of tools in the response.
    pub result_count: usize,
    /// Raw query string size in bytes.
    pub query_bytes: usize,
}

impl RequestAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: RequestAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "request_audit",
            timestamp_ms,
            route: params.route,
            design: params.design,
            locale: params.locale,
            status: params.status,
            result_count: params.result_count,
            query_bytes: params.query_bytes,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for request events.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &RequestAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &RequestAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for FileAuditSink {
    fn record(&self, event: &RequestAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &RequestAuditEvent) {}
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds the sink described by `config`.
///
/// # Errors
///
/// Returns an error when a configured audit file cannot be opened.
pub fn sink_from_config(config: &AuditConfig) -> io::Result<Arc<dyn AuditSink>> {
    if !config.enabled {
        return Ok(Arc::new(NoopAuditSink));
    }
    match config.path.as_deref() {
        Some(path) => Ok(Arc::new(FileAuditSink::new(Path::new(path.trim()))?)),
        None => Ok(Arc::new(StderrAuditSink)),
    }
}
