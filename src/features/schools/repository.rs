use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::features::schools::models::{NewSchool, School};

/// Failure talking to the backing store. Wraps the driver error so the
/// detail survives up to the HTTP layer.
#[derive(Debug, Error)]
#[error("Database error: {0}")]
pub struct StorageError(#[from] pub sqlx::Error);

/// Persistence operations for schools
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Insert a school; the store assigns `id` and `created_at`
    async fn create(&self, school: NewSchool) -> Result<School, StorageError>;

    /// Every stored school, newest first
    async fn list_all(&self) -> Result<Vec<School>, StorageError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<School>, StorageError>;
}

/// Postgres-backed repository sharing the process-wide pool
pub struct PgSchoolRepository {
    pool: PgPool,
}

impl PgSchoolRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolRepository for PgSchoolRepository {
    async fn create(&self, school: NewSchool) -> Result<School, StorageError> {
        let created = sqlx::query_as::<_, School>(
            r#"
            INSERT INTO schools (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, address, latitude, longitude, created_at
            "#,
        )
        .bind(&school.name)
        .bind(&school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert school: {:?}", e);
            StorageError(e)
        })?;

        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<School>, StorageError> {
        let schools = sqlx::query_as::<_, School>(
            r#"
            SELECT id, name, address, latitude, longitude, created_at
            FROM schools
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list schools: {:?}", e);
            StorageError(e)
        })?;

        Ok(schools)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<School>, StorageError> {
        let school = sqlx::query_as::<_, School>(
            r#"
            SELECT id, name, address, latitude, longitude, created_at
            FROM schools
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get school by id: {:?}", e);
            StorageError(e)
        })?;

        Ok(school)
    }
}
