use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::locations::dtos::{DivisionResponseDto, UpazilaResponseDto, ZilaResponseDto};
use crate::features::locations::services::LocationService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::parse_id;

/// List all divisions
#[utoipa::path(
    get,
    path = "/api/divisions",
    responses(
        (status = 200, description = "List of divisions", body = ApiResponse<Vec<DivisionResponseDto>>)
    ),
    tag = "locations"
)]
pub async fn list_divisions(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<ApiResponse<Vec<DivisionResponseDto>>>> {
    let divisions = service.list_divisions().await?;
    let dtos: Vec<DivisionResponseDto> = divisions.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::list(dtos)))
}

/// List zilas in a division
#[utoipa::path(
    get,
    path = "/api/zilas/{division_id}",
    params(
        ("division_id" = i32, Path, description = "Division id")
    ),
    responses(
        (status = 200, description = "List of zilas in the division", body = ApiResponse<Vec<ZilaResponseDto>>),
        (status = 400, description = "Division id is not a positive integer"),
        (status = 404, description = "Division not found")
    ),
    tag = "locations"
)]
pub async fn list_zilas(
    State(service): State<Arc<LocationService>>,
    Path(division_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ZilaResponseDto>>>> {
    let division_id = parse_id(&division_id, "divisionId")?;
    let zilas = service.list_zilas(division_id).await?;
    let dtos: Vec<ZilaResponseDto> = zilas.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::list(dtos)))
}

/// List upazilas in a zila
#[utoipa::path(
    get,
    path = "/api/upazilas/{zila_id}",
    params(
        ("zila_id" = i32, Path, description = "Zila id")
    ),
    responses(
        (status = 200, description = "List of upazilas in the zila", body = ApiResponse<Vec<UpazilaResponseDto>>),
        (status = 400, description = "Zila id is not a positive integer"),
        (status = 404, description = "Zila not found")
    ),
    tag = "locations"
)]
pub async fn list_upazilas(
    State(service): State<Arc<LocationService>>,
    Path(zila_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<UpazilaResponseDto>>>> {
    let zila_id = parse_id(&zila_id, "zilaId")?;
    let upazilas = service.list_upazilas(zila_id).await?;
    let dtos: Vec<UpazilaResponseDto> = upazilas.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::list(dtos)))
}
