use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::donors::dtos::{
    CreateDonorDto, CreatedDonorDto, DonorResponseDto, DonorSearchQuery, UpdateAvailabilityDto,
};
use crate::features::donors::repositories::DonorFilter;
use crate::features::donors::services::DonorService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::parse_id;

/// Search donors
///
/// All filters are optional and combine with AND. Results are ordered by most
/// recent update. Phone numbers are masked.
#[utoipa::path(
    get,
    path = "/api/donors",
    params(DonorSearchQuery),
    responses(
        (status = 200, description = "Matching donors", body = ApiResponse<Vec<DonorResponseDto>>),
        (status = 400, description = "Malformed filter value")
    ),
    tag = "donors"
)]
pub async fn list_donors(
    State(service): State<Arc<DonorService>>,
    AppQuery(query): AppQuery<DonorSearchQuery>,
) -> Result<Json<ApiResponse<Vec<DonorResponseDto>>>> {
    let filter = DonorFilter::try_from(query)?;
    let donors = service.search(filter).await?;
    Ok(Json(ApiResponse::list(donors)))
}

/// Get a donor by id
#[utoipa::path(
    get,
    path = "/api/donors/{id}",
    params(
        ("id" = i32, Path, description = "Donor id")
    ),
    responses(
        (status = 200, description = "Donor found", body = ApiResponse<DonorResponseDto>),
        (status = 400, description = "Id is not a positive integer"),
        (status = 404, description = "Donor not found")
    ),
    tag = "donors"
)]
pub async fn get_donor(
    State(service): State<Arc<DonorService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DonorResponseDto>>> {
    let id = parse_id(&id, "id")?;
    let donor = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(donor), None, None)))
}

/// Register a donor
#[utoipa::path(
    post,
    path = "/api/donors",
    request_body = CreateDonorDto,
    responses(
        (status = 201, description = "Donor registered", body = ApiResponse<CreatedDonorDto>),
        (status = 400, description = "Missing field, invalid value, hierarchy mismatch or consent not given")
    ),
    tag = "donors"
)]
pub async fn create_donor(
    State(service): State<Arc<DonorService>>,
    AppJson(dto): AppJson<CreateDonorDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDonorDto>>)> {
    let created = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some("Donor registered successfully".to_string()),
            None,
        )),
    ))
}

/// Update a donor's availability
#[utoipa::path(
    patch,
    path = "/api/donors/{id}/availability",
    params(
        ("id" = i32, Path, description = "Donor id")
    ),
    request_body = UpdateAvailabilityDto,
    responses(
        (status = 200, description = "Availability updated", body = ApiResponse<DonorResponseDto>),
        (status = 400, description = "Invalid id or body"),
        (status = 404, description = "Donor not found")
    ),
    tag = "donors"
)]
pub async fn update_availability(
    State(service): State<Arc<DonorService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateAvailabilityDto>,
) -> Result<Json<ApiResponse<DonorResponseDto>>> {
    let id = parse_id(&id, "id")?;
    let donor = service.update_availability(id, dto.is_available).await?;
    Ok(Json(ApiResponse::success(
        Some(donor),
        Some("Availability updated".to_string()),
        None,
    )))
}
