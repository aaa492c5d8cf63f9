//! License lookup routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use courier_store::LicenseRepo;
use serde::Deserialize;
use serde_json::json;

use crate::errors::ApiError;
use crate::state::Db;

#[derive(Debug, Deserialize)]
pub struct CreateLicenseRequest {
    pub uuid: String,
    pub license_number: String,
}

/// POST /api/license - store a license under a new uuid
pub async fn create_license(
    State(db): State<Db>,
    Json(request): Json<CreateLicenseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let conn = db.lock().await;
    let license_id = LicenseRepo::add(&conn, &request.uuid, &request.license_number)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "license_id": license_id,
        })),
    ))
}

/// GET /api/license/{uuid} - exact-match lookup
pub async fn get_license(
    State(db): State<Db>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let conn = db.lock().await;
    let license = LicenseRepo::get_by_uuid(&conn, &uuid)?
        .ok_or_else(|| ApiError::NotFound(format!("no license for uuid {}", uuid)))?;

    Ok(Json(json!({
        "status": "success",
        "data": license,
    })))
}

/// GET /api/licenses - every stored license (operational inspection)
pub async fn all_licenses(State(db): State<Db>) -> Result<impl IntoResponse, ApiError> {
    let conn = db.lock().await;
    let licenses = LicenseRepo::list_all(&conn)?;

    Ok(Json(json!({
        "status": "success",
        "total": licenses.len(),
        "data": licenses,
    })))
}
