//! Liveness probe
//!
//! Polled by an external supervisor; answers without touching the store so
//! a wedged database surfaces as request failures, not a dead process.

use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
