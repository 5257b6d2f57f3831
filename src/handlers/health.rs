use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe: the stores are in-memory, so a running process is a
/// healthy process.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "message": "FindIt AI Backend is running",
    }))
}
