//! Health check endpoint.

use axum::Json;
use common::HealthResponse;

/// GET /health — liveness stub, always `{"status": "healthy"}`.
pub async fn check() -> Json<HealthResponse> {
    let body = HealthResponse::healthy();
    tracing::debug!(status = %body.status, "serving health check");
    Json(body)
}
