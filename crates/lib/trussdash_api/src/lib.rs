//! # trussdash_api
//!
//! HTTP API library for Trussdash.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use trussdash_core::catalog::{CatalogService, DocumentSource, FileDocumentSource};
use trussdash_core::dashboard::DashboardStore;
use trussdash_core::production::ProductionTracker;
use trussdash_core::vendor::{VendorClient, VendorError};

use crate::config::ApiConfig;
use crate::handlers::{catalog, dashboards, geometry, health, production, vendor, widgets};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Endpoint catalog, built once on first use.
    pub catalog: Arc<CatalogService>,
    pub dashboards: Arc<DashboardStore>,
    pub production: Arc<ProductionTracker>,
    pub vendor: VendorClient,
}

impl AppState {
    /// State backed by the OpenAPI document at `config.document_path`.
    pub fn new(config: ApiConfig) -> Result<Self, VendorError> {
        let source = FileDocumentSource::new(config.document_path.clone());
        Self::with_source(config, source)
    }

    /// State with an explicit catalog document source.
    pub fn with_source(
        config: ApiConfig,
        source: impl DocumentSource + 'static,
    ) -> Result<Self, VendorError> {
        let vendor = VendorClient::new(&config.vendor)?;
        Ok(Self {
            config,
            catalog: Arc::new(CatalogService::new(source)),
            dashboards: Arc::new(DashboardStore::new()),
            production: Arc::new(ProductionTracker::new()),
            vendor,
        })
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let catalog_routes = Router::new()
        .route(routes::GET_API_CATALOG, get(catalog::catalog_handler))
        .route(routes::GET_API_CATALOG_ENDPOINTS, get(catalog::endpoints_handler))
        .route(
            routes::GET_API_CATALOG_ENDPOINTS_BY_TAG,
            get(catalog::endpoints_by_tag_handler),
        )
        .route(routes::GET_API_CATALOG_SCHEMAS, get(catalog::schemas_handler))
        .route(routes::GET_API_CATALOG_SCHEMAS_NAME, get(catalog::schema_handler))
        .route(
            routes::POST_API_GEOMETRY_MEMBER_LENGTH,
            post(geometry::member_length_handler),
        );

    let dashboard_routes = Router::new()
        .route(
            routes::API_DASHBOARDS,
            get(dashboards::list_dashboards_handler).post(dashboards::create_dashboard_handler),
        )
        .route(
            routes::GET_API_DASHBOARDS_DEFAULT,
            get(dashboards::default_dashboard_handler),
        )
        .route(
            routes::API_DASHBOARDS_CURRENT,
            get(dashboards::current_dashboard_handler).put(dashboards::select_dashboard_handler),
        )
        .route(
            routes::API_DASHBOARDS_ID,
            get(dashboards::get_dashboard_handler).delete(dashboards::delete_dashboard_handler),
        )
        .route(
            routes::POST_API_DASHBOARDS_ID_WIDGETS,
            post(widgets::add_widget_handler),
        )
        .route(
            routes::API_DASHBOARDS_ID_WIDGETS_WIDGET_ID,
            put(widgets::update_widget_handler).delete(widgets::remove_widget_handler),
        )
        .route(
            routes::PATCH_API_DASHBOARDS_ID_WIDGETS_WIDGET_ID_POSITION,
            patch(widgets::move_widget_handler),
        )
        .route(
            routes::PATCH_API_DASHBOARDS_ID_WIDGETS_WIDGET_ID_SIZE,
            patch(widgets::resize_widget_handler),
        )
        .route(
            routes::GET_API_DASHBOARDS_ID_WIDGETS_WIDGET_ID_DATA,
            get(widgets::widget_data_handler),
        );

    let vendor_routes = Router::new()
        .route(routes::GET_API_PROJECTS, get(vendor::projects_handler))
        .route(
            routes::GET_API_COMPONENT_DESIGNS_GUID,
            get(vendor::component_design_handler),
        )
        .route(routes::POST_API_LUMBER_PRICES, post(vendor::lumber_prices_handler))
        .route(
            routes::GET_API_PLATE_TYPES_PLATE_TYPE,
            get(vendor::plate_type_handler),
        )
        .route(
            routes::API_PRODUCTION_GUID,
            get(production::get_production_handler).put(production::update_production_handler),
        );

    Router::new()
        .route(routes::GET_API_HEALTH, get(health::health_handler))
        .merge(catalog_routes)
        .merge(dashboard_routes)
        .merge(vendor_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
