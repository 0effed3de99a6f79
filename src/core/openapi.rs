use utoipa::{Modify, OpenApi};

use crate::core::router::{self, HealthResponseDto};
use crate::features::donors::{
    dtos as donors_dtos, handlers as donors_handlers, models as donors_models,
};
use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        router::health_check,
        // Donors
        donors_handlers::list_donors,
        donors_handlers::get_donor,
        donors_handlers::create_donor,
        donors_handlers::update_availability,
        // Locations
        locations_handlers::list_divisions,
        locations_handlers::list_zilas,
        locations_handlers::list_upazilas,
    ),
    components(
        schemas(
            Meta,
            HealthResponseDto,
            // Donors
            donors_models::BloodGroup,
            donors_dtos::CreateDonorDto,
            donors_dtos::CreatedDonorDto,
            donors_dtos::UpdateAvailabilityDto,
            donors_dtos::DonorResponseDto,
            ApiResponse<donors_dtos::CreatedDonorDto>,
            ApiResponse<donors_dtos::DonorResponseDto>,
            ApiResponse<Vec<donors_dtos::DonorResponseDto>>,
            // Locations
            locations_dtos::DivisionResponseDto,
            locations_dtos::ZilaResponseDto,
            locations_dtos::UpazilaResponseDto,
            ApiResponse<Vec<locations_dtos::DivisionResponseDto>>,
            ApiResponse<Vec<locations_dtos::ZilaResponseDto>>,
            ApiResponse<Vec<locations_dtos::UpazilaResponseDto>>,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "donors", description = "Donor registration and search"),
        (name = "locations", description = "Division, zila and upazila lookup")
    )
)]
pub struct ApiDoc;

pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
