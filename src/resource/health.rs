use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::AppError;
use crate::resource::doctor::AppState;

/// GET /health
///
/// Answers 200 when the backend responds to a trivial query, the error
/// envelope otherwise.
pub async fn health(State(backend): State<AppState>) -> Result<Response, AppError> {
    backend.health_check().await?;

    Ok((StatusCode::OK, Json(json!({ "status": "success" }))).into_response())
}
