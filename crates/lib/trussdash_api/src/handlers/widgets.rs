//! Widget request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use trussdash_core::models::dashboard::WidgetConfig;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{MoveWidgetRequest, ResizeWidgetRequest, WidgetDataResponse};

/// A widget template must name a GET endpoint known to the catalog.
async fn check_template(state: &AppState, widget: &WidgetConfig) -> AppResult<()> {
    let Some(template) = widget.endpoint_template.as_deref() else {
        return Ok(());
    };
    if state.catalog.find_endpoint(template).await.is_none() {
        return Err(AppError::Validation(format!(
            "unknown endpoint template: {template}"
        )));
    }
    Ok(())
}

/// Every required path or query parameter of the widget's catalog endpoint
/// must have a filter value.
async fn check_required_filters(state: &AppState, widget: &WidgetConfig) -> AppResult<()> {
    let Some(template) = widget.endpoint_template.as_deref() else {
        return Ok(());
    };
    let Some(endpoint) = state.catalog.find_endpoint(template).await else {
        return Ok(());
    };
    let missing = endpoint.missing_parameters(&widget.filters);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "missing required filters: {}",
            missing.join(", ")
        )));
    }
    Ok(())
}

/// `POST /api/dashboards/{id}/widgets`: add a widget.
pub async fn add_widget_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(widget): Json<WidgetConfig>,
) -> AppResult<(StatusCode, Json<WidgetConfig>)> {
    check_template(&state, &widget).await?;
    let widget = state.dashboards.add_widget(&id, widget).await?;
    Ok((StatusCode::CREATED, Json(widget)))
}

/// `PUT /api/dashboards/{id}/widgets/{widget_id}`: replace a widget.
pub async fn update_widget_handler(
    State(state): State<AppState>,
    Path((id, widget_id)): Path<(String, String)>,
    Json(mut widget): Json<WidgetConfig>,
) -> AppResult<Json<WidgetConfig>> {
    widget.id = widget_id;
    check_template(&state, &widget).await?;
    Ok(Json(state.dashboards.update_widget(&id, widget).await?))
}

/// `DELETE /api/dashboards/{id}/widgets/{widget_id}`: remove a widget.
pub async fn remove_widget_handler(
    State(state): State<AppState>,
    Path((id, widget_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    state.dashboards.remove_widget(&id, &widget_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /api/dashboards/{id}/widgets/{widget_id}/position`: move a widget.
pub async fn move_widget_handler(
    State(state): State<AppState>,
    Path((id, widget_id)): Path<(String, String)>,
    Json(body): Json<MoveWidgetRequest>,
) -> AppResult<Json<WidgetConfig>> {
    let widget = state
        .dashboards
        .move_widget(&id, &widget_id, body.row, body.column)
        .await?;
    Ok(Json(widget))
}

/// `PATCH /api/dashboards/{id}/widgets/{widget_id}/size`: resize a widget.
pub async fn resize_widget_handler(
    State(state): State<AppState>,
    Path((id, widget_id)): Path<(String, String)>,
    Json(body): Json<ResizeWidgetRequest>,
) -> AppResult<Json<WidgetConfig>> {
    let widget = state
        .dashboards
        .resize_widget(&id, &widget_id, body.width, body.height)
        .await?;
    Ok(Json(widget))
}

/// `GET /api/dashboards/{id}/widgets/{widget_id}/data`: fetch live data from
/// the vendor API for a widget.
pub async fn widget_data_handler(
    State(state): State<AppState>,
    Path((id, widget_id)): Path<(String, String)>,
) -> AppResult<Json<WidgetDataResponse>> {
    let dashboard = state.dashboards.get(&id).await?;
    let widget = dashboard
        .widget(&widget_id)
        .ok_or_else(|| AppError::NotFound(format!("widget {widget_id}")))?;
    check_required_filters(&state, widget).await?;
    let request = widget.data_request()?;
    let data = state.vendor.get_json(&request.path, &request.query).await?;

    Ok(Json(WidgetDataResponse {
        widget_id,
        path: request.path,
        query: request.query,
        data: data.unwrap_or(Value::Null),
    }))
}
