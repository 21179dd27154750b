//! Web API module for Layout Mockup.
//!
//! This module exposes the layout store over a small REST API so a browser
//! frontend can drive the arrangement. Every client works in its own
//! session; sessions never observe each other's state.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/sessions` - Create a session (optional seed or exported document body)
//! - `GET /api/sessions/{id}` - Current view of a session
//! - `DELETE /api/sessions/{id}` - Discard a session
//! - `POST /api/sessions/{id}/actions` - Apply one action
//! - `POST /api/sessions/{id}/reset` - Restore the seed layout
//! - `GET /api/sessions/{id}/hidden` - Hidden fields panel
//! - `GET /api/sessions/{id}/export` - Export document and suggested filename

pub mod sessions;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ErrorKind, LayoutError, SeedError};
use crate::models::{ExportDocument, Layout};
use crate::parser;
use crate::services::ExportService;
use crate::store::{Action, ActionOutcome, HiddenField, LayoutStore, LayoutView};

pub use sessions::{SessionError, SessionRegistry};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Default seed for new sessions (immutable after load)
    seed: Arc<Layout>,
    /// Live sessions
    sessions: Arc<SessionRegistry>,
}

impl AppState {
    /// Creates a new application state, loading the configured seed.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let seed = config.load_seed()?;
        Ok(Self::with_seed(config, seed))
    }

    /// Creates a new application state with an explicit default seed.
    #[must_use]
    pub fn with_seed(config: &Config, seed: Layout) -> Self {
        let sessions = SessionRegistry::new(&config.sessions);
        Self {
            seed: Arc::new(seed),
            sessions: Arc::new(sessions),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Response to session creation.
#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    /// Id to use in subsequent requests.
    pub session_id: Uuid,
    /// Initial view of the session.
    pub view: LayoutView,
}

/// Response to an applied action.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    /// What the action did.
    pub outcome: ActionOutcome,
    /// Short human-readable notice.
    pub message: String,
    /// View after the action.
    pub view: LayoutView,
}

/// Hidden fields panel response.
#[derive(Debug, Serialize)]
pub struct HiddenFieldsResponse {
    /// Hidden fields in layout order.
    pub fields: Vec<HiddenField>,
}

/// Export response.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    /// The exported document.
    pub document: ExportDocument,
    /// Suggested download filename.
    pub suggested_filename: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Error type returned by every handler.
type ApiFailure = (StatusCode, Json<ApiError>);

impl From<SessionError> for ApiFailure {
    fn from(err: SessionError) -> Self {
        let status = match err {
            SessionError::NotFound(_) => StatusCode::NOT_FOUND,
            SessionError::LimitReached(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        warn!("Rejected request: {}", err);
        (status, Json(ApiError::new(err.to_string())))
    }
}

/// Maps a store error onto its HTTP status.
fn layout_failure(err: &LayoutError) -> ApiFailure {
    let status = match err.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidOperation => StatusCode::CONFLICT,
    };
    warn!("Rejected action: {}", err);
    (
        status,
        Json(ApiError::with_details(err.to_string(), err.kind().to_string())),
    )
}

/// Maps a seed / document error onto 400.
fn seed_failure(err: &SeedError) -> ApiFailure {
    warn!("Rejected layout document: {}", err);
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details(
            "Invalid layout document",
            err.to_string(),
        )),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/sessions - Create a session.
///
/// An empty body uses the server's default seed; otherwise the body is a
/// seed definition or a previously exported document.
async fn create_session(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<SessionCreatedResponse>), ApiFailure> {
    let store = if body.trim().is_empty() {
        LayoutStore::from_seed(Arc::clone(&state.seed))
    } else {
        let layout = parser::parse_layout_str(&body).map_err(|e| seed_failure(&e))?;
        LayoutStore::new(layout)
    };

    let view = store.view();
    let session_id = state.sessions.create(store)?;

    Ok((
        StatusCode::CREATED,
        Json(SessionCreatedResponse { session_id, view }),
    ))
}

/// GET /api/sessions/{id} - Current view.
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LayoutView>, ApiFailure> {
    let view = state.sessions.with_session(&id, |store| store.view())?;
    Ok(Json(view))
}

/// DELETE /api/sessions/{id} - Discard a session.
async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiFailure> {
    state.sessions.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sessions/{id}/actions - Apply one action.
async fn apply_action(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(action): Json<Action>,
) -> Result<Json<ActionResponse>, ApiFailure> {
    let result = state.sessions.with_session(&id, |store| {
        store.apply(&action).map(|outcome| ActionResponse {
            message: outcome.message(),
            outcome,
            view: store.view(),
        })
    })?;

    result.map(Json).map_err(|e| layout_failure(&e))
}

/// POST /api/sessions/{id}/reset - Restore the seed layout.
async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LayoutView>, ApiFailure> {
    let view = state.sessions.with_session(&id, |store| {
        store.reset();
        store.view()
    })?;
    Ok(Json(view))
}

/// GET /api/sessions/{id}/hidden - Hidden fields panel.
async fn hidden_fields(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HiddenFieldsResponse>, ApiFailure> {
    let fields = state.sessions.with_session(&id, |store| store.hidden_fields())?;
    Ok(Json(HiddenFieldsResponse { fields }))
}

/// GET /api/sessions/{id}/export - Export the current arrangement.
async fn export_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExportResponse>, ApiFailure> {
    let document = state.sessions.with_session(&id, |store| store.export())?;
    Ok(Json(ExportResponse {
        document,
        suggested_filename: ExportService::suggested_filename_today(),
    }))
}

// ============================================================================
// Router & Server
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the server is meant to run locally next to its frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Session endpoints
        .route("/api/sessions", post(create_session))
        .route(
            "/api/sessions/{id}",
            get(get_session).delete(delete_session),
        )
        .route("/api/sessions/{id}/actions", post(apply_action))
        .route("/api/sessions/{id}/reset", post(reset_session))
        .route("/api/sessions/{id}/hidden", get(hidden_fields))
        .route("/api/sessions/{id}/export", get(export_session))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `addr` - Socket address to bind to
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(&config)?;
    let app = create_router(state);

    info!("Starting Layout Mockup web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
