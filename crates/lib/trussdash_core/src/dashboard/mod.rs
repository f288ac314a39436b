//! Dashboard state: in-memory dashboards, widget placement and widget data
//! requests.
//!
//! Dashboards live only for the lifetime of the process.

pub mod request;
pub mod store;

use thiserror::Error;

use crate::models::dashboard::{GRID_COLUMNS, WidgetConfig};

pub use request::{WidgetDataRequest, data_request};
pub use store::DashboardStore;

/// Dashboard errors.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Dashboard not found: {0}")]
    NotFound(String),

    #[error("Widget not found: {0}")]
    WidgetNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Check grid placement and the endpoint method of a widget.
pub fn validate_widget(widget: &WidgetConfig) -> Result<(), DashboardError> {
    if widget.id.trim().is_empty() {
        return Err(DashboardError::Validation("widget id must not be empty".into()));
    }
    validate_position(widget.row, widget.column)?;
    validate_size(widget.column, widget.width, widget.height)?;
    if !widget.endpoint_method.eq_ignore_ascii_case("GET") {
        return Err(DashboardError::Validation(format!(
            "unsupported endpoint method: {}",
            widget.endpoint_method
        )));
    }
    Ok(())
}

pub(crate) fn validate_position(row: u32, column: u32) -> Result<(), DashboardError> {
    if row == 0 || column == 0 {
        return Err(DashboardError::Validation(
            "row and column start at 1".into(),
        ));
    }
    if column > GRID_COLUMNS {
        return Err(DashboardError::Validation(format!(
            "column must be at most {GRID_COLUMNS}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_size(column: u32, width: u32, height: u32) -> Result<(), DashboardError> {
    if !(1..=GRID_COLUMNS).contains(&width) {
        return Err(DashboardError::Validation(format!(
            "width must be between 1 and {GRID_COLUMNS}"
        )));
    }
    if height == 0 {
        return Err(DashboardError::Validation("height must be at least 1".into()));
    }
    if column + width - 1 > GRID_COLUMNS {
        return Err(DashboardError::Validation(format!(
            "widget overflows the {GRID_COLUMNS}-column grid"
        )));
    }
    Ok(())
}
