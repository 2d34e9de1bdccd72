// crates/tool-atlas-views/src/lib.rs
// ============================================================================
// Module: Tool Atlas Views
// Description: Design variants, page state, rendering, and the display server.
// Purpose: Present the catalog in eleven interchangeable designs.
// Dependencies: tool-atlas-core, tool-atlas-config, axum, tokio, url
// ============================================================================

//! ## Overview
//! Every design variant shares one pipeline: a request's query string
//! resolves to a [`PageState`], [`PageModel::build`] filters and orders the
//! catalog for that state, and [`render_page`] emits HTML shaped by the
//! variant's [`ViewCapabilities`] and [`Theme`]. The same model backs the JSON
//! endpoints served by [`DisplayServer`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod api;
pub mod audit;
pub mod i18n;
pub mod model;
pub mod page;
pub mod render;
pub mod server;
pub mod variant;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use api::DesignEntry;
pub use api::ErrorBody;
pub use api::ToolsResponse;
pub use api::design_entries;
pub use audit::AuditSink;
pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::RequestAuditEvent;
pub use audit::StderrAuditSink;
pub use model::PageModel;
pub use page::ListLayout;
pub use page::PageQuery;
pub use page::PageState;
pub use render::render_page;
pub use server::AppState;
pub use server::DisplayServer;
pub use server::ServerError;
pub use variant::Theme;
pub use variant::ViewCapabilities;
pub use variant::capabilities;
pub use variant::theme;
