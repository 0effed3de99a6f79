use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{Division, Upazila, Zila};

/// Read access to the seeded location hierarchy
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn list_divisions(&self) -> Result<Vec<Division>>;
    async fn find_division(&self, id: i32) -> Result<Option<Division>>;
    async fn list_zilas(&self, division_id: i32) -> Result<Vec<Zila>>;
    async fn find_zila(&self, id: i32) -> Result<Option<Zila>>;
    async fn list_upazilas(&self, zila_id: i32) -> Result<Vec<Upazila>>;
    async fn find_upazila(&self, id: i32) -> Result<Option<Upazila>>;
}

pub struct PgLocationRepository {
    pool: PgPool,
}

impl PgLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn list_divisions(&self) -> Result<Vec<Division>> {
        sqlx::query_as::<_, Division>("SELECT id, name FROM divisions ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch divisions: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_division(&self, id: i32) -> Result<Option<Division>> {
        sqlx::query_as::<_, Division>("SELECT id, name FROM divisions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch division {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn list_zilas(&self, division_id: i32) -> Result<Vec<Zila>> {
        sqlx::query_as::<_, Zila>(
            r#"
            SELECT id, division_id, name
            FROM zilas
            WHERE division_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(division_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch zilas for division {}: {:?}",
                division_id,
                e
            );
            AppError::Database(e)
        })
    }

    async fn find_zila(&self, id: i32) -> Result<Option<Zila>> {
        sqlx::query_as::<_, Zila>("SELECT id, division_id, name FROM zilas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch zila {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn list_upazilas(&self, zila_id: i32) -> Result<Vec<Upazila>> {
        sqlx::query_as::<_, Upazila>(
            r#"
            SELECT id, zila_id, name
            FROM upazilas
            WHERE zila_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(zila_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch upazilas for zila {}: {:?}", zila_id, e);
            AppError::Database(e)
        })
    }

    async fn find_upazila(&self, id: i32) -> Result<Option<Upazila>> {
        sqlx::query_as::<_, Upazila>("SELECT id, zila_id, name FROM upazilas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch upazila {}: {:?}", id, e);
                AppError::Database(e)
            })
    }
}
