use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::backend::DoctorBackend;
use crate::error::AppError;
use crate::models::{DoctorListResponse, DoctorPayload, DoctorResponse};

pub type AppState = Arc<dyn DoctorBackend>;

/// GET /api/doctors
///
/// Returns every row of the table, unfiltered. The envelope carries the row
/// count alongside the rows.
pub async fn list_doctors(State(backend): State<AppState>) -> Result<Response, AppError> {
    let doctors = backend.list_doctors().await?;

    Ok((StatusCode::OK, Json(DoctorListResponse::new(doctors))).into_response())
}

/// GET /api/doctors/{id}
///
/// Answers 200 whether or not a row matched; a missing id simply yields an
/// envelope without a `doctor` key. "Not found" is not a protocol-level
/// condition for this service.
pub async fn get_doctor(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let doctor = backend.find_doctor_by_id(&id).await?;

    Ok((StatusCode::OK, Json(DoctorResponse::new(doctor))).into_response())
}

/// POST /api/doctors
///
/// The insert does not read the created row back, so the 201 envelope never
/// carries a `doctor` key. Missing payload fields are stored as NULL.
pub async fn create_doctor(
    State(backend): State<AppState>,
    Json(payload): Json<DoctorPayload>,
) -> Result<Response, AppError> {
    backend.create_doctor(&payload).await?;

    Ok((StatusCode::CREATED, Json(DoctorResponse::new(None))).into_response())
}

/// PUT /api/doctors/{id}
///
/// Overwrites name, city and specialty unconditionally (no partial-update
/// semantics) and returns the updated row. An id with no matching row
/// answers 200 with no `doctor` key, consistent with get_doctor.
pub async fn update_doctor(
    State(backend): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<DoctorPayload>,
) -> Result<Response, AppError> {
    let doctor = backend.update_doctor(&id, &payload).await?;

    Ok((StatusCode::OK, Json(DoctorResponse::new(doctor))).into_response())
}

/// DELETE /api/doctors/{id}
///
/// Answers a bodyless 204 whether or not a row matched.
pub async fn delete_doctor(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    backend.delete_doctor(&id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
