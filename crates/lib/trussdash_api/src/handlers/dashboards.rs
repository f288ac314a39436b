//! Dashboard request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use trussdash_core::models::dashboard::DashboardConfiguration;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{CreateDashboardRequest, SelectDashboardRequest};

/// `GET /api/dashboards`: all dashboards.
pub async fn list_dashboards_handler(
    State(state): State<AppState>,
) -> Json<Vec<DashboardConfiguration>> {
    Json(state.dashboards.list().await)
}

/// `POST /api/dashboards`: create a dashboard and select it.
pub async fn create_dashboard_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateDashboardRequest>,
) -> AppResult<(StatusCode, Json<DashboardConfiguration>)> {
    let dashboard = state.dashboards.create(&body.name).await?;
    Ok((StatusCode::CREATED, Json(dashboard)))
}

/// `GET /api/dashboards/default`: the first dashboard, created on demand.
pub async fn default_dashboard_handler(
    State(state): State<AppState>,
) -> Json<DashboardConfiguration> {
    Json(state.dashboards.get_or_create_default().await)
}

/// `GET /api/dashboards/current`: the selected dashboard.
pub async fn current_dashboard_handler(
    State(state): State<AppState>,
) -> AppResult<Json<DashboardConfiguration>> {
    state
        .dashboards
        .current()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no dashboard selected".into()))
}

/// `PUT /api/dashboards/current`: select a dashboard.
pub async fn select_dashboard_handler(
    State(state): State<AppState>,
    Json(body): Json<SelectDashboardRequest>,
) -> AppResult<Json<DashboardConfiguration>> {
    Ok(Json(state.dashboards.set_current(&body.id).await?))
}

/// `GET /api/dashboards/{id}`: one dashboard.
pub async fn get_dashboard_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DashboardConfiguration>> {
    Ok(Json(state.dashboards.get(&id).await?))
}

/// `DELETE /api/dashboards/{id}`: delete a dashboard.
pub async fn delete_dashboard_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.dashboards.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
