use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/divisions", get(handlers::list_divisions))
        .route("/api/zilas/{division_id}", get(handlers::list_zilas))
        .route("/api/upazilas/{zila_id}", get(handlers::list_upazilas))
        .with_state(service)
}
