//! Command queue routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use courier_store::CommandRepo;
use serde::Deserialize;
use serde_json::json;

use crate::errors::ApiError;
use crate::state::Db;

#[derive(Debug, Deserialize)]
pub struct CreateCommandRequest {
    pub device_id: String,
    pub payload: String,
}

/// POST /api/command - a sender queues a command for a device
pub async fn create_command(
    State(db): State<Db>,
    Json(request): Json<CreateCommandRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let conn = db.lock().await;
    let command_id = CommandRepo::enqueue(&conn, &request.device_id, &request.payload)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": format!("Command queued for device {}", request.device_id),
            "command_id": command_id,
        })),
    ))
}

/// GET /api/device/{device_id}/pending - the polling route
///
/// Atomically hands the device its oldest pending command and marks it
/// executed. An empty queue is a normal 200 with null data, not a 404:
/// polling devices hit this constantly.
pub async fn pending_command(
    State(db): State<Db>,
    Path(device_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = db.lock().await;
    let claimed = CommandRepo::claim_next(&mut conn, &device_id)?;

    Ok(Json(match claimed {
        Some(command) => json!({
            "status": "success",
            "data": command,
            "message": "Command found",
        }),
        None => json!({
            "status": "success",
            "data": null,
            "message": "No pending command",
        }),
    }))
}

/// GET /api/device/{device_id}/commands - full history for a device
pub async fn device_commands(
    State(db): State<Db>,
    Path(device_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let conn = db.lock().await;
    let commands = CommandRepo::list_by_device(&conn, &device_id)?;

    Ok(Json(json!({
        "status": "success",
        "total": commands.len(),
        "data": commands,
    })))
}

/// GET /api/commands - every command, all devices (operational inspection)
pub async fn all_commands(State(db): State<Db>) -> Result<impl IntoResponse, ApiError> {
    let conn = db.lock().await;
    let commands = CommandRepo::list_all(&conn)?;

    Ok(Json(json!({
        "status": "success",
        "total": commands.len(),
        "data": commands,
    })))
}
