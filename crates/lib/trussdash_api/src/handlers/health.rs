//! Health endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /api/health`: version, catalog size and vendor reachability.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = state.catalog.catalog().await;
    let vendor_available = state.vendor.health_check().await;

    Json(HealthResponse {
        status: "ok".into(),
        version: trussdash_core::version().to_string(),
        endpoint_count: catalog.endpoints.len(),
        schema_count: catalog.schemas.len(),
        vendor_available,
    })
}
