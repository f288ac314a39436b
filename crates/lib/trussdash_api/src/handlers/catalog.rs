//! Endpoint catalog handlers.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use trussdash_core::catalog::{Catalog, EndpointCatalogEntry, SchemaCatalogEntry};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::EndpointsQuery;

/// `GET /api/catalog`: the full catalog.
pub async fn catalog_handler(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.catalog().await.as_ref().clone())
}

/// `GET /api/catalog/endpoints`: endpoint entries, optionally for one tag.
pub async fn endpoints_handler(
    State(state): State<AppState>,
    Query(params): Query<EndpointsQuery>,
) -> Json<Vec<EndpointCatalogEntry>> {
    let mut endpoints = state.catalog.endpoints().await;
    if let Some(tag) = params.tag.as_deref() {
        endpoints.retain(|e| e.tag == tag);
    }
    Json(endpoints)
}

/// `GET /api/catalog/endpoints/by-tag`: endpoint entries grouped by tag.
pub async fn endpoints_by_tag_handler(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, Vec<EndpointCatalogEntry>>> {
    Json(state.catalog.endpoints_by_tag().await)
}

/// `GET /api/catalog/schemas`: every schema by name.
pub async fn schemas_handler(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, SchemaCatalogEntry>> {
    Json(state.catalog.schemas().await)
}

/// `GET /api/catalog/schemas/{name}`: a single schema.
pub async fn schema_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<SchemaCatalogEntry>> {
    state
        .catalog
        .schema(&name)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("schema {name}")))
}
