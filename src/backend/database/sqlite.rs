use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::time::Duration;

use super::{parse_doctor_id, DatabaseBackendConfig};
use crate::backend::{Backend, DoctorBackend};
use crate::error::{AppError, AppResult};
use crate::models::{Doctor, DoctorPayload};

/// SQLite implementation of the doctor store
pub struct SqliteBackend {
    pool: SqlitePool,
}

impl SqliteBackend {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Build pool options for the given configuration.
///
/// An in-memory database exists per connection, so the pool is pinned to a
/// single connection that must never be reaped: `min_connections` keeps it
/// alive and the idle/lifetime limits are disabled, otherwise the pool would
/// close the connection after its idle timeout and take the database (table
/// and all) with it.
fn pool_options(config: &DatabaseBackendConfig) -> SqlitePoolOptions {
    let options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout));

    if config.is_memory_database() {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let connection_url = if config.connection_url == ":memory:" {
            "sqlite::memory:".to_string()
        } else {
            config.connection_url.clone()
        };

        let pool = pool_options(config)
            .connect(&connection_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

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
                id INTEGER PRIMARY KEY AUTOINCREMENT,
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
impl DoctorBackend for SqliteBackend {
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
            "SELECT id, name, city, specialty FROM doctors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(doctor)
    }

    async fn create_doctor(&self, payload: &DoctorPayload) -> AppResult<()> {
        sqlx::query("INSERT INTO doctors (name, city, specialty) VALUES (?, ?, ?)")
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
            UPDATE doctors SET name = ?, city = ?, specialty = ?
            WHERE id = ?
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

        sqlx::query("DELETE FROM doctors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
