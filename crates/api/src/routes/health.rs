//! Liveness endpoint for the intake API.

use axum::Json;
use serde::Serialize;

/// Liveness report for the intake process.
///
/// Covers the HTTP layer only; the order store is not probed, so a healthy
/// response does not imply the database is reachable.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health — reports that the intake API is up and accepting submissions.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
