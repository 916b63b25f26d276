use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub success: bool,
    pub message: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /ping-server - authenticated liveness probe used by the scheduler
pub async fn ping_server() -> Json<PingResponse> {
    Json(PingResponse {
        success: true,
        message: "pong".to_string(),
        timestamp: Utc::now().timestamp_millis(),
    })
}
