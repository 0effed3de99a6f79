use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::donors::handlers;
use crate::features::donors::services::DonorService;

/// Create routes for the donors feature
pub fn routes(service: Arc<DonorService>) -> Router {
    Router::new()
        .route(
            "/api/donors",
            get(handlers::list_donors).post(handlers::create_donor),
        )
        .route("/api/donors/{id}", get(handlers::get_donor))
        .route(
            "/api/donors/{id}/availability",
            patch(handlers::update_availability),
        )
        .with_state(service)
}
