/**
 * Health Check Handler
 *
 * Liveness probe for deployment tooling. Answers without touching the
 * database or the upstream weather service, and requires no authentication.
 */

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check handler for GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
