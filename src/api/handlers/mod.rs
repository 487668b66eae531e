use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;

use crate::api::SharedController;
use crate::render::Scene;
use crate::view::{FilterQuery, LineVisibility, TypeFilter};
use crate::web;

// ============================================================
// Error Handling
// ============================================================

/// A controller that never finished loading is a service problem, not a
/// client one: the dataset load failed at startup or is still running, and
/// nothing retries it.
fn not_ready(reason: impl std::fmt::Display) -> (StatusCode, String) {
    let msg = reason.to_string();
    tracing::warn!("request rejected, dataset not ready: {}", msg);
    (StatusCode::SERVICE_UNAVAILABLE, msg)
}

fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Shell & health
// ============================================================

pub async fn index() -> Html<&'static str> {
    Html(web::MAP_SHELL_HTML)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Dataset
// ============================================================

pub async fn list_features(
    State(controller): State<SharedController>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let controller = controller.lock().expect("controller lock poisoned");
    let store = controller.store().ok_or_else(|| {
        not_ready(
            controller
                .load_error()
                .unwrap_or("dataset is still loading"),
        )
    })?;

    serde_json::to_value(store.collection())
        .map(Json)
        .map_err(internal_error)
}

pub async fn list_entity_types(
    State(controller): State<SharedController>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    let controller = controller.lock().expect("controller lock poisoned");
    let store = controller.store().ok_or_else(|| {
        not_ready(
            controller
                .load_error()
                .unwrap_or("dataset is still loading"),
        )
    })?;

    Ok(Json(store.collection().entity_types()))
}

// ============================================================
// Filter/render cycle
// ============================================================

/// The inputs of one filter action, read together when the filter triggers:
/// the search field, the type selector, and the optional line-visibility
/// mode (`lines=strict` hides lines whose endpoints are filtered out).
#[derive(Debug, Deserialize)]
pub struct SceneParams {
    #[serde(default)]
    search: String,
    #[serde(default, rename = "type")]
    entity_type: String,
    #[serde(default)]
    lines: String,
}

pub async fn build_scene(
    State(controller): State<SharedController>,
    Query(params): Query<SceneParams>,
) -> Result<Json<Scene>, (StatusCode, String)> {
    let query = FilterQuery::new(
        params.search.trim(),
        TypeFilter::from_param(params.entity_type.trim()),
    );
    let line_visibility = LineVisibility::from_param(params.lines.trim());

    let mut controller = controller.lock().expect("controller lock poisoned");
    controller
        .apply_filter(&query, line_visibility)
        .map(Json)
        .map_err(not_ready)
}
