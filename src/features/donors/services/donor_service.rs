use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::donors::dtos::{CreateDonorDto, CreatedDonorDto, DonorResponseDto};
use crate::features::donors::masking::mask_phone_number;
use crate::features::donors::repositories::{DonorFilter, DonorOrdering, DonorRepository};
use crate::features::locations::LocationService;

/// Service for donor registration, search and availability
pub struct DonorService {
    donors: Arc<dyn DonorRepository>,
    locations: Arc<LocationService>,
}

impl DonorService {
    pub fn new(donors: Arc<dyn DonorRepository>, locations: Arc<LocationService>) -> Self {
        Self { donors, locations }
    }

    /// Search donors matching every present criterion, most recently updated first
    pub async fn search(&self, filter: DonorFilter) -> Result<Vec<DonorResponseDto>> {
        let donors = self
            .donors
            .search(&filter, DonorOrdering::default())
            .await?;

        if filter.is_empty() {
            tracing::debug!("Unfiltered donor listing returned {} donors", donors.len());
        } else {
            tracing::debug!("Donor search {:?} matched {} donors", filter, donors.len());
        }

        Ok(donors.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<DonorResponseDto> {
        self.donors
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Donor with id {} not found", id)))
    }

    /// Validate and register a donor; nothing is stored unless every check passes
    pub async fn create(&self, dto: CreateDonorDto) -> Result<CreatedDonorDto> {
        let today = self.donors.today().await?;
        let donor = dto.into_new_donor(today)?;

        self.locations
            .ensure_hierarchy(donor.division_id, donor.zila_id, donor.upazila_id)
            .await?;

        let id = self.donors.insert(&donor).await?;

        tracing::info!(
            "Registered donor {} ({}, {})",
            id,
            donor.blood_group,
            mask_phone_number(&donor.phone_number)
        );

        Ok(CreatedDonorDto { id })
    }

    pub async fn update_availability(
        &self,
        id: i32,
        is_available: bool,
    ) -> Result<DonorResponseDto> {
        let donor = self
            .donors
            .update_availability(id, is_available)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Donor with id {} not found", id)))?;

        tracing::info!("Donor {} availability set to {}", id, is_available);

        Ok(donor.into())
    }
}
