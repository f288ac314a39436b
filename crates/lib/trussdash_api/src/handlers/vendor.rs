//! Truss-design API passthrough handlers.

use axum::Json;
use axum::extract::{Path, State};
use trussdash_core::models::vendor::{
    ComponentDesignResponse, LumberPriceRequest, LumberPriceResponse, PlateTypeProperties,
    Project,
};

use crate::AppState;
use crate::error::{AppError, AppResult};

/// `GET /api/projects`: projects visible to the API key.
pub async fn projects_handler(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(state.vendor.projects().await?))
}

/// `GET /api/component-designs/{guid}`: a component design with member
/// lengths recomputed from geometry.
pub async fn component_design_handler(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> AppResult<Json<ComponentDesignResponse>> {
    state
        .vendor
        .component_design(&guid)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("component design {guid}")))
}

/// `POST /api/lumber-prices`: most recent prices for every stock length.
pub async fn lumber_prices_handler(
    State(state): State<AppState>,
    Json(body): Json<LumberPriceRequest>,
) -> AppResult<Json<Vec<LumberPriceResponse>>> {
    Ok(Json(state.vendor.lumber_prices(&body).await?))
}

/// `GET /api/plate-types/{plate_type}`
pub async fn plate_type_handler(
    State(state): State<AppState>,
    Path(plate_type): Path<String>,
) -> AppResult<Json<PlateTypeProperties>> {
    state
        .vendor
        .plate_type_properties(&plate_type)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("plate type {plate_type}")))
}
