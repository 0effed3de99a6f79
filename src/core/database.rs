use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Owned handle to the donor store.
///
/// Constructed once at startup and handed to the repositories; nothing reaches
/// the pool through global state. `close` waits for checked-out connections to
/// be returned before shutting the pool down.
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn open(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            // Bounded wait so exhaustion surfaces as PoolTimedOut instead of hanging
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
