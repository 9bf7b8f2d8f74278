use axum::Json;

use crate::dto::response::HealthResponse;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
    })
}
