// crates/tool-atlas-views/src/server.rs
// ============================================================================
// Module: Display Server
// Description: HTTP server for rendered pages and JSON endpoints.
// Purpose: Serve the catalog in every design variant over plain GET routes.
// Dependencies: tool-atlas-core, tool-atlas-config, axum, tokio
// ============================================================================

//! ## Overview
//! The display server is read-only. `GET /` renders the page for the state
//! carried in the query string; `/api/tools`, `/api/tools/{id}`, and
//! `/api/designs` return JSON built from the same pipeline. Query strings are
//! untrusted: oversized queries are rejected before parsing and unknown
//! values resolve to safe defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::extract::RawQuery;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use tool_atlas_config::DisplayConfig;
use tool_atlas_config::ToolAtlasConfig;
use tool_atlas_core::Catalog;

use crate::api::ErrorBody;
use crate::api::ToolsResponse;
use crate::api::design_entries;
use crate::audit::AuditRoute;
use crate::audit::AuditSink;
use crate::audit::RequestAuditEvent;
use crate::audit::RequestAuditEventParams;
use crate::audit::sink_from_config;
use crate::model::PageModel;
use crate::page::PageQuery;
use crate::page::PageState;
use crate::render::render_page;

// ============================================================================
// SECTION: Display Server
// ============================================================================

/// Display server instance.
pub struct DisplayServer {
    /// Socket address to bind.
    bind: SocketAddr,
    /// Shared handler state.
    state: Arc<AppState>,
}

impl DisplayServer {
    /// Builds a display server from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the configuration is invalid, the catalog
    /// fails to load, or the audit log cannot be opened.
    pub fn from_config(config: ToolAtlasConfig) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let bind = config.server.bind_addr().map_err(|err| ServerError::Config(err.to_string()))?;
        let catalog = Catalog::builtin().map_err(|err| ServerError::Init(err.to_string()))?;
        let audit = sink_from_config(&config.audit)
            .map_err(|err| ServerError::Init(format!("audit log unavailable: {err}")))?;
        let state = AppState::new(catalog, config.display, config.server.max_query_bytes, audit);
        Ok(Self {
            bind,
            state: Arc::new(state),
        })
    }

    /// Returns the configured bind address.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind
    }

    /// Returns the HTTP router without binding a socket.
    pub fn router(&self) -> Router {
        router(Arc::clone(&self.state))
    }

    /// Serves requests until the listener fails.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Transport`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let app = router(self.state);
        let listener = tokio::net::TcpListener::bind(self.bind)
            .await
            .map_err(|_| ServerError::Transport("http bind failed".to_string()))?;
        axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .map_err(|_| ServerError::Transport("http server failed".to_string()))
    }
}

/// Builds the route table over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/tools", get(tools_handler))
        .route("/api/tools/{id}", get(tool_handler))
        .route("/api/designs", get(designs_handler))
        .route("/healthz", get(healthz_handler))
        .with_state(state)
}

// ============================================================================
// SECTION: State
// ============================================================================

/// Shared state for HTTP handlers.
pub struct AppState {
    /// Loaded catalog.
    catalog: &'static Catalog,
    /// Default design and locale.
    display: DisplayConfig,
    /// Maximum accepted query string size.
    max_query_bytes: usize,
    /// Request audit sink.
    audit: Arc<dyn AuditSink>,
}

impl AppState {
    /// Creates handler state.
    #[must_use]
    pub fn new(
        catalog: &'static Catalog,
        display: DisplayConfig,
        max_query_bytes: usize,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            catalog,
            display,
            max_query_bytes,
            audit,
        }
    }

    /// Records one request.
    fn record(&self, params: RequestAuditEventParams) {
        self.audit.record(&RequestAuditEvent::new(params));
    }

    /// Parses the raw query, or returns its size when it exceeds the limit.
    fn parse_query(&self, raw: Option<&str>) -> Result<(PageQuery, usize), usize> {
        let raw = raw.unwrap_or_default();
        if raw.len() > self.max_query_bytes {
            return Err(raw.len());
        }
        Ok((PageQuery::parse(raw), raw.len()))
    }
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Renders the HTML page for the requested state.
async fn page_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let (query, query_bytes) = match state.parse_query(raw.as_deref()) {
        Ok(parsed) => parsed,
        Err(query_bytes) => return reject_oversized(&state, AuditRoute::Page, query_bytes),
    };
    let page = PageState::resolve(&query, &state.display);
    let model = PageModel::build(state.catalog, page);
    let body = render_page(&model, &state.display);
    state.record(RequestAuditEventParams {
        route: AuditRoute::Page,
        design: Some(model.state.variant),
        locale: model.state.locale,
        status: StatusCode::OK.as_u16(),
        result_count: model.tools.len(),
        query_bytes,
    });
    Html(body).into_response()
}

/// Returns the filtered tool list as JSON.
///
/// Filters apply as given; `design` only selects the ordering.
async fn tools_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let (query, query_bytes) = match state.parse_query(raw.as_deref()) {
        Ok(parsed) => parsed,
        Err(query_bytes) => return reject_oversized(&state, AuditRoute::Tools, query_bytes),
    };
    let mut page = PageState::resolve(&query, &state.display);
    page.selection = query.selection();
    let model = PageModel::build(state.catalog, page);
    state.record(RequestAuditEventParams {
        route: AuditRoute::Tools,
        design: Some(model.state.variant),
        locale: model.state.locale,
        status: StatusCode::OK.as_u16(),
        result_count: model.tools.len(),
        query_bytes,
    });
    Json(ToolsResponse::from_model(&model)).into_response()
}

/// Returns one tool by id.
async fn tool_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let found = state.catalog.get(&id);
    let status = if found.is_some() { StatusCode::OK } else { StatusCode::NOT_FOUND };
    state.record(RequestAuditEventParams {
        route: AuditRoute::Tool,
        design: None,
        locale: state.display.default_locale,
        status: status.as_u16(),
        result_count: usize::from(found.is_some()),
        query_bytes: 0,
    });
    match found {
        Some(tool) => Json(tool).into_response(),
        None => (status, Json(ErrorBody::new("not_found", format!("unknown tool: {id}"))))
            .into_response(),
    }
}

/// Lists every design variant with its profile.
async fn designs_handler(State(state): State<Arc<AppState>>) -> Response {
    let entries = design_entries(state.display.default_design);
    state.record(RequestAuditEventParams {
        route: AuditRoute::Designs,
        design: None,
        locale: state.display.default_locale,
        status: StatusCode::OK.as_u16(),
        result_count: entries.len(),
        query_bytes: 0,
    });
    Json(entries).into_response()
}

/// Liveness probe.
async fn healthz_handler() -> &'static str {
    "ok"
}

/// Rejects a request whose query string exceeds the configured limit.
fn reject_oversized(state: &AppState, route: AuditRoute, query_bytes: usize) -> Response {
    let status = StatusCode::URI_TOO_LONG;
    state.record(RequestAuditEventParams {
        route,
        design: None,
        locale: state.display.default_locale,
        status: status.as_u16(),
        result_count: 0,
        query_bytes,
    });
    let message = format!("query exceeds {} bytes", state.max_query_bytes);
    (status, Json(ErrorBody::new("query_too_long", message))).into_response()
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Display server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization errors.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
