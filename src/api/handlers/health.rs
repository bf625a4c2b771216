/*
 * Responsibility
 * - GET /api/health (liveness)
 * - Lives under /api/ so the gate never sends it to the auth service
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
