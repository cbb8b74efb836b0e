use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use doctor_server::backend::{BackendFactory, DoctorBackend};
use doctor_server::backend::database::DatabaseBackendConfig;
use doctor_server::logging::logging_middleware;
use doctor_server::resource;
use serde_json::json;
use std::sync::Arc;

/// Create backend for testing with in-memory SQLite database
pub async fn setup_test_backend() -> Result<Arc<dyn DoctorBackend>, Box<dyn std::error::Error>> {
    let backend_config = DatabaseBackendConfig::memory_sqlite().with_max_connections(1);

    let backend = BackendFactory::create(&backend_config).await?;
    backend.init_schema().await?;

    Ok(backend)
}

/// Create a test app wired to an in-memory database
pub async fn setup_test_app() -> Result<Router, Box<dyn std::error::Error>> {
    let backend = setup_test_backend().await?;

    let app = Router::new()
        .route("/api/doctors", get(resource::doctor::list_doctors))
        .route("/api/doctors", post(resource::doctor::create_doctor))
        .route("/api/doctors/{id}", get(resource::doctor::get_doctor))
        .route("/api/doctors/{id}", put(resource::doctor::update_doctor))
        .route("/api/doctors/{id}", delete(resource::doctor::delete_doctor))
        .route("/health", get(resource::health::health))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(backend);

    Ok(app)
}

/// Build a doctor payload for testing
pub fn create_test_doctor_json(name: &str, city: &str, specialty: &str) -> serde_json::Value {
    json!({
        "name": name,
        "city": city,
        "specialty": specialty
    })
}
