//! Request Timeout Middleware
//!
//! Bounds the time spent handling a single request. An expired request is
//! answered through `AppError`, so the body stays a JSON string like every
//! other error.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::shared::error::AppError;

/// Abort the request once `limit` has elapsed.
pub async fn request_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    tokio::time::timeout(limit, next.run(request))
        .await
        .map_err(|_| {
            tracing::warn!(%method, %uri, timeout_ms = limit.as_millis() as u64, "Request timed out");
            AppError::Timeout(format!("Request timed out after {}s", limit.as_secs_f64()))
        })
}
