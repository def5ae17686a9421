//! Policy Content Service
//!
//! Serves static privacy-policy documents over a small read-only REST API:
//! a listing of every registered policy and a by-key lookup. Content is
//! compiled into the binary and held in an immutable registry for the
//! lifetime of the process.

pub mod content;
pub mod cors;
pub mod registry;
pub mod routes;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::registry::PolicyRegistry;

/// Application state shared across handlers
///
/// The registry is built once at startup and never mutated, so handlers
/// share it behind an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PolicyRegistry>,
}

impl AppState {
    /// Create application state holding the built-in policy registry
    pub fn new() -> Self {
        let state = Self::with_registry(content::builtin_policies());
        info!(
            "Loaded {} policy document(s) into the registry",
            state.registry.len()
        );
        state
    }

    /// Create application state over an explicit registry
    pub fn with_registry(registry: PolicyRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Custom error type for API responses
///
/// Errors on the policy routes render as JSON `{"error": ...}` bodies; the
/// plain-text shape is reserved for the route-level fallback.
#[derive(Debug)]
pub struct ApiError {
    pub status_code: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError {
            status_code: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(json!({ "error": self.message }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Health check endpoint
async fn healthz() -> impl IntoResponse {
    "OK"
}

/// Create the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/privacy/all", get(routes::list_policies))
        .route("/privacy/:key", get(routes::get_policy))
        .fallback(routes::route_not_found)
        // Answers OPTIONS probes before routing and stamps cross-origin
        // read headers onto every response.
        .layer(middleware::from_fn(cors::allow_public_reads))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
