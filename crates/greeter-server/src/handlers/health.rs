//! Liveness probe.

use axum::Json;

use crate::schema::health::HealthResponse;

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
