use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /
/// Liveness message.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Assessment insight API is running"
    }))
}

/// GET /health
/// Returns a status object with the current UTC timestamp.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}
