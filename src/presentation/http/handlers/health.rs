//! Health Check Handler

use axum::Json;

use crate::application::dto::response::HealthResponse;

/// Liveness check. Does not touch the database.
pub async fn health_check() -> Json<HealthResponse> {
    tracing::trace!("health");
    Json(HealthResponse { ok: true })
}
