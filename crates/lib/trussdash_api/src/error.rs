//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};
use trussdash_core::dashboard::DashboardError;
use trussdash_core::production::ProductionError;
use trussdash_core::vendor::VendorError;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.as_str()),
            AppError::Upstream(m) => {
                warn!("upstream failure: {m}");
                (StatusCode::BAD_GATEWAY, "upstream_error", m.as_str())
            }
            AppError::Internal(m) => {
                error!("internal error: {m}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                )
            }
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<DashboardError> for AppError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::NotFound(_) | DashboardError::WidgetNotFound(_) => {
                AppError::NotFound(e.to_string())
            }
            DashboardError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

impl From<VendorError> for AppError {
    fn from(e: VendorError) -> Self {
        match e {
            VendorError::Status { status: 404, .. } => AppError::NotFound(e.to_string()),
            VendorError::InvalidSegment(_) => AppError::Validation(e.to_string()),
            VendorError::Request(_) | VendorError::Status { .. } | VendorError::Decode(_) => {
                AppError::Upstream(e.to_string())
            }
            VendorError::InvalidUrl(_) | VendorError::Config(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<ProductionError> for AppError {
    fn from(e: ProductionError) -> Self {
        match e {
            ProductionError::Validation(msg) => AppError::Validation(msg),
        }
    }
}
