use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::donors::{routes as donors_routes, DonorService};
use crate::features::locations::{routes as locations_routes, LocationService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    pub status: String,
}

/// Liveness probe, answered with a bare `{"status":"ok"}` outside the response envelope
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponseDto)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponseDto> {
    Json(HealthResponseDto {
        status: "ok".to_string(),
    })
}

/// All API routes, without swagger and transport layers
pub fn api_routes(
    donor_service: Arc<DonorService>,
    location_service: Arc<LocationService>,
) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .merge(donors_routes::routes(donor_service))
        .merge(locations_routes::routes(location_service))
}
