//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlRepository;

/// PostgreSQL repository for alias records.
///
/// The `url` table and its alias index are created by the embedded
/// migration (see `migrations/`), which is idempotent.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Runs a trivial query to verify the pool can reach the database.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map(|_| ())
            .map_err(StoreError::internal)
    }

    /// Loads the full record for an alias, including its id.
    pub async fn find_record(&self, alias: &str) -> Result<UrlRecord, StoreError> {
        let (id, alias, url) = sqlx::query_as::<_, (i32, String, String)>(
            "SELECT id, alias, url FROM url WHERE alias = $1",
        )
        .bind(alias)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, alias))?;

        Ok(UrlRecord::new(i64::from(id), alias, url))
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save(&self, destination: &str, alias: &str) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO url (url, alias) VALUES ($1, $2) RETURNING id",
        )
        .bind(destination)
        .bind(alias)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, alias))?;

        Ok(i64::from(id))
    }

    async fn get(&self, alias: &str) -> Result<String, StoreError> {
        let url = sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| map_sqlx_error(e, alias))?;

        if url.is_empty() {
            return Err(StoreError::NotFound);
        }

        Ok(url)
    }

    async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| map_sqlx_error(e, alias))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

/// Maps a driver error onto the store error kinds.
///
/// Unique violations (SQLSTATE 23505) become [`StoreError::Conflict`],
/// missing rows become [`StoreError::NotFound`].
fn map_sqlx_error(e: sqlx::Error, alias: &str) -> StoreError {
    if matches!(e, sqlx::Error::RowNotFound) {
        return StoreError::NotFound;
    }

    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return StoreError::Conflict(alias.to_string());
    }

    StoreError::internal(e)
}
