//! Health check.

use axum::response::IntoResponse;
use axum::Json;

/// Liveness probe. Reports process health only; extractor binaries are
/// probed separately at startup.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
