use crate::error::AppResult;
use crate::models::{Doctor, DoctorPayload};
use async_trait::async_trait;
use std::sync::Arc;

pub mod database;

/// Supported database backend types
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
}

/// Core backend abstraction
///
/// This trait defines the fundamental lifecycle operations any store backend
/// must implement. Each backend implementation (PostgreSQL, SQLite) builds on
/// top of this trait.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Connect and initialize the storage backend
    async fn connect(config: &database::DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Create the doctors table if it does not exist yet
    async fn init_schema(&self) -> AppResult<()>;

    /// Clean up resources when storage is no longer needed
    async fn cleanup(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Doctor record operations
///
/// Each method issues exactly one parameterized SQL statement. The `id`
/// arguments arrive as the opaque path segment; parsing happens here so that
/// a non-numeric id surfaces as a bad request from the store layer, the same
/// place a database driver would reject it.
#[async_trait]
pub trait DoctorBackend: Backend {
    /// Fetch every row of the doctors table, unfiltered and unpaginated
    async fn list_doctors(&self) -> AppResult<Vec<Doctor>>;

    /// Find a doctor by id; `None` when no row matches
    async fn find_doctor_by_id(&self, id: &str) -> AppResult<Option<Doctor>>;

    /// Insert a new doctor; the store assigns the id. The insert does not
    /// read the row back.
    async fn create_doctor(&self, payload: &DoctorPayload) -> AppResult<()>;

    /// Overwrite name, city and specialty unconditionally and return the
    /// updated row, or `None` when no row matches
    async fn update_doctor(&self, id: &str, payload: &DoctorPayload) -> AppResult<Option<Doctor>>;

    /// Delete a doctor; succeeds whether or not a row matched
    async fn delete_doctor(&self, id: &str) -> AppResult<()>;
}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(
        config: &database::DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn DoctorBackend>> {
        let backend = Self::create_backend(config).await?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    pub async fn create_backend(
        config: &database::DatabaseBackendConfig,
    ) -> AppResult<Box<dyn DoctorBackend>> {
        match config.database_type {
            DatabaseType::PostgreSQL => {
                let backend = database::postgres::PostgresBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::SQLite => {
                let backend = database::sqlite::SqliteBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
        }
    }
}
