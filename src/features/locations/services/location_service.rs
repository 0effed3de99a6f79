use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{Division, Upazila, Zila};
use crate::features::locations::repositories::LocationRepository;

/// Service for the division → zila → upazila hierarchy
pub struct LocationService {
    repository: Arc<dyn LocationRepository>,
}

impl LocationService {
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_divisions(&self) -> Result<Vec<Division>> {
        self.repository.list_divisions().await
    }

    /// List zilas of a division; the division itself must exist
    pub async fn list_zilas(&self, division_id: i32) -> Result<Vec<Zila>> {
        self.repository
            .find_division(division_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Division with id {} not found", division_id))
            })?;

        self.repository.list_zilas(division_id).await
    }

    /// List upazilas of a zila; the zila itself must exist
    pub async fn list_upazilas(&self, zila_id: i32) -> Result<Vec<Upazila>> {
        self.repository
            .find_zila(zila_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Zila with id {} not found", zila_id)))?;

        self.repository.list_upazilas(zila_id).await
    }

    /// Check that the three ids exist and nest: the zila belongs to the division
    /// and the upazila belongs to the zila.
    pub async fn ensure_hierarchy(
        &self,
        division_id: i32,
        zila_id: i32,
        upazila_id: i32,
    ) -> Result<()> {
        if self.repository.find_division(division_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "unknown divisionId: {}",
                division_id
            )));
        }

        let zila = self
            .repository
            .find_zila(zila_id)
            .await?
            .ok_or_else(|| AppError::Validation(format!("unknown zilaId: {}", zila_id)))?;
        if zila.division_id != division_id {
            return Err(AppError::Validation(format!(
                "zilaId {} does not belong to divisionId {}",
                zila_id, division_id
            )));
        }

        let upazila = self
            .repository
            .find_upazila(upazila_id)
            .await?
            .ok_or_else(|| AppError::Validation(format!("unknown upazilaId: {}", upazila_id)))?;
        if upazila.zila_id != zila_id {
            return Err(AppError::Validation(format!(
                "upazilaId {} does not belong to zilaId {}",
                upazila_id, zila_id
            )));
        }

        Ok(())
    }
}
