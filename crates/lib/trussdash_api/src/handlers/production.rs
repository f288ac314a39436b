//! Production tracking handlers.

use axum::Json;
use axum::extract::{Path, State};
use trussdash_core::models::production::ProductionData;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// `GET /api/production/{guid}`: tracking data, pending if never recorded.
pub async fn get_production_handler(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> Json<ProductionData> {
    Json(state.production.get(&guid))
}

/// `PUT /api/production/{guid}`: replace tracking data.
pub async fn update_production_handler(
    State(state): State<AppState>,
    Path(guid): Path<String>,
    Json(mut data): Json<ProductionData>,
) -> AppResult<Json<ProductionData>> {
    if data.component_guid.is_empty() {
        data.component_guid = guid;
    } else if data.component_guid != guid {
        return Err(AppError::Validation(format!(
            "componentGuid {} does not match path {guid}",
            data.component_guid
        )));
    }
    Ok(Json(state.production.update(data)?))
}
