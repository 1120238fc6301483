use axum::Json;

use crate::handlers::timestamp;

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": timestamp()
    }))
}
