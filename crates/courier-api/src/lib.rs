//! Courier API - HTTP boundary over the command dispatch queue
//!
//! Thin axum layer: routes map one-to-one onto store operations, handlers
//! own JSON encoding and status codes, the store owns everything else.
//!
//! | Route | Operation |
//! |---|---|
//! | `POST /api/command` | enqueue |
//! | `GET /api/device/{device_id}/pending` | claim next (marks executed) |
//! | `GET /api/device/{device_id}/commands` | history for a device |
//! | `GET /api/commands` | all commands |
//! | `POST /api/license` | add license |
//! | `GET /api/license/{uuid}` | license lookup |
//! | `GET /api/licenses` | all licenses |
//! | `GET /api/health` | liveness probe |

pub mod errors;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use state::Db;

use axum::routing::{get, post};
use axum::Router;

/// Build the API router over an opened store
pub fn router(db: Db) -> Router {
    Router::new()
        .route("/api/command", post(routes::commands::create_command))
        .route(
            "/api/device/:device_id/pending",
            get(routes::commands::pending_command),
        )
        .route(
            "/api/device/:device_id/commands",
            get(routes::commands::device_commands),
        )
        .route("/api/commands", get(routes::commands::all_commands))
        .route("/api/license", post(routes::licenses::create_license))
        .route("/api/license/:uuid", get(routes::licenses::get_license))
        .route("/api/licenses", get(routes::licenses::all_licenses))
        .route("/api/health", get(routes::health::health))
        .with_state(db)
}
