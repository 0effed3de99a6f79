use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::donors::models::{Donor, NewDonor};
use crate::features::donors::repositories::{DonorFilter, DonorOrdering, DONOR_COLUMNS};

/// Store access for donor records.
///
/// Donors are created and then updated in place; there is no delete.
#[async_trait]
pub trait DonorRepository: Send + Sync {
    async fn search(&self, filter: &DonorFilter, ordering: DonorOrdering) -> Result<Vec<Donor>>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Donor>>;
    /// Insert and return the store-assigned id
    async fn insert(&self, donor: &NewDonor) -> Result<i32>;
    async fn update_availability(&self, id: i32, is_available: bool) -> Result<Option<Donor>>;
    /// The store's current date, the same clock `lastDonationWithin` is evaluated against
    async fn today(&self) -> Result<NaiveDate>;
}

pub struct PgDonorRepository {
    pool: PgPool,
}

impl PgDonorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonorRepository for PgDonorRepository {
    async fn search(&self, filter: &DonorFilter, ordering: DonorOrdering) -> Result<Vec<Donor>> {
        let mut query = filter.search_query(ordering);

        query
            .build_query_as::<Donor>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search donors with {:?}: {:?}", filter, e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Donor>> {
        let query = format!("SELECT {} FROM donors WHERE id = $1", DONOR_COLUMNS);

        sqlx::query_as::<_, Donor>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch donor {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, donor: &NewDonor) -> Result<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO donors (
                first_name, last_name, blood_group, division_id, zila_id, upazila_id,
                village, current_location, last_donation_date, phone_number, is_available, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(&donor.first_name)
        .bind(&donor.last_name)
        .bind(donor.blood_group)
        .bind(donor.division_id)
        .bind(donor.zila_id)
        .bind(donor.upazila_id)
        .bind(&donor.village)
        .bind(&donor.current_location)
        .bind(donor.last_donation_date)
        .bind(&donor.phone_number)
        .bind(donor.is_available)
        .bind(&donor.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert donor: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update_availability(&self, id: i32, is_available: bool) -> Result<Option<Donor>> {
        // updated_at is refreshed by the trg_donors_updated_at trigger
        let query = format!(
            "UPDATE donors SET is_available = $1 WHERE id = $2 RETURNING {}",
            DONOR_COLUMNS
        );

        sqlx::query_as::<_, Donor>(&query)
            .bind(is_available)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update availability of donor {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn today(&self) -> Result<NaiveDate> {
        sqlx::query_scalar::<_, NaiveDate>("SELECT CURRENT_DATE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read store date: {:?}", e);
                AppError::Database(e)
            })
    }
}
