mod handlers;

use std::sync::{Arc, Mutex};

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controller::MapController;

/// Shared application state: one controller behind a mutex, so concurrent
/// requests serialize their filter/render cycles.
pub type SharedController = Arc<Mutex<MapController>>;

pub fn create_router(controller: SharedController) -> Router {
    let api = Router::new()
        // Dataset
        .route("/features", get(handlers::list_features))
        .route("/types", get(handlers::list_entity_types))
        // Filter/render cycle
        .route("/scene", get(handlers::build_scene))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(controller)
}
