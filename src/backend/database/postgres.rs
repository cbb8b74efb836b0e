use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use super::{parse_doctor_id, DatabaseBackendConfig};
use crate::backend::{Backend, DoctorBackend};
use crate::error::{AppError, AppResult};
use crate::models::{Doctor, DoctorPayload};

/// PostgreSQL implementation of the doctor store
pub struct PostgresBackend {
    pool: PgPool,
}

impl PostgresBackend {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Backend for PostgresBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&config.connection_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

        Ok(Self::new(pool))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;

        Ok(())
    }

    async fn init_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS doctors (
                id BIGSERIAL PRIMARY KEY,
                name TEXT,
                city TEXT,
                specialty TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create doctors table: {}", e)))?;

        Ok(())
    }

    async fn cleanup(&self) -> AppResult<()> {
        self.pool.close().await;
        Ok(())
    }
}

#[async_trait]
impl DoctorBackend for PostgresBackend {
    async fn list_doctors(&self) -> AppResult<Vec<Doctor>> {
        let doctors =
            sqlx::query_as::<_, Doctor>("SELECT id, name, city, specialty FROM doctors")
                .fetch_all(&self.pool)
                .await?;

        Ok(doctors)
    }

    async fn find_doctor_by_id(&self, id: &str) -> AppResult<Option<Doctor>> {
        let id = parse_doctor_id(id)?;

        let doctor = sqlx::query_as::<_, Doctor>(
            "SELECT id, name, city, specialty FROM doctors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(doctor)
    }

    async fn create_doctor(&self, payload: &DoctorPayload) -> AppResult<()> {
        sqlx::query("INSERT INTO doctors (name, city, specialty) VALUES ($1, $2, $3)")
            .bind(&payload.name)
            .bind(&payload.city)
            .bind(&payload.specialty)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_doctor(&self, id: &str, payload: &DoctorPayload) -> AppResult<Option<Doctor>> {
        let id = parse_doctor_id(id)?;

        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            UPDATE doctors SET name = $1, city = $2, specialty = $3
            WHERE id = $4
            RETURNING id, name, city, specialty
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.city)
        .bind(&payload.specialty)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(doctor)
    }

    async fn delete_doctor(&self, id: &str) -> AppResult<()> {
        let id = parse_doctor_id(id)?;

        sqlx::query("DELETE FROM doctors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
