//! HTTP route handlers for the policy API

use crate::{ApiError, ApiResult, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use policy_model::{PolicyDocument, PolicyListItem};
use tracing::{debug, info};

/// GET /privacy/all - List every registered policy
///
/// Returns a JSON array of `{id, title}` entries in registration order. An
/// empty registry yields an empty array, never an error.
pub async fn list_policies(State(state): State<AppState>) -> Json<Vec<PolicyListItem>> {
    debug!("Handling GET /privacy/all");

    let items = state.registry.list();
    info!("Listed {} policies", items.len());
    Json(items)
}

/// GET /privacy/:key - Get a single policy document
///
/// The key is matched case-sensitively against the registry. A miss is a
/// 404 with a JSON error body, distinguishable from the route-level
/// plain-text fallback.
pub async fn get_policy(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Json<PolicyDocument>> {
    debug!("Handling GET /privacy/{}", key);

    match state.registry.get(&key) {
        Some(document) => {
            info!("Served policy: {}", key);
            Ok(Json(document.clone()))
        }
        None => {
            debug!("Policy not found: {}", key);
            Err(ApiError::not_found("Privacy Policy not found."))
        }
    }
}

/// Fallback for requests outside the policy API
///
/// Plain text on purpose: the JSON `{"error": ...}` shape is reserved for a
/// `/privacy/:key` lookup miss.
pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "Not Found. Use /privacy/all to see available policies.",
    )
}
