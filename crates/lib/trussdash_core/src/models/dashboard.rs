//! Dashboard domain models.
//!
//! A dashboard is a named grid of widgets. Each widget is bound to one GET
//! endpoint of the vendor API and renders its data as a table, chart or KPI
//! card.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of columns in the dashboard grid.
pub const GRID_COLUMNS: u32 = 12;

pub const DEFAULT_DASHBOARD_NAME: &str = "My Dashboard";

/// How a widget renders its data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetType {
    #[default]
    DataTable,
    BarChart,
    LineChart,
    PieChart,
    KpiCard,
}

/// A dashboard with its widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfiguration {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
}

impl DashboardConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            widgets: Vec::new(),
        }
    }

    pub fn widget(&self, widget_id: &str) -> Option<&WidgetConfig> {
        self.widgets.iter().find(|w| w.id == widget_id)
    }

    pub(crate) fn widget_mut(&mut self, widget_id: &str) -> Option<&mut WidgetConfig> {
        self.widgets.iter_mut().find(|w| w.id == widget_id)
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Configuration of a single widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub widget_type: WidgetType,

    // Grid placement, 1-based.
    pub row: u32,
    pub column: u32,
    /// Columns spanned (1..=12).
    pub width: u32,
    /// Rows spanned.
    pub height: u32,

    /// Concrete path to call, used when no template is set.
    pub endpoint_path: Option<String>,
    /// Catalog path template, e.g. `/api/users/{id}`.
    pub endpoint_template: Option<String>,
    pub endpoint_method: String,
    pub display_fields: Vec<String>,
    /// Values for path placeholders and query parameters.
    pub filters: BTreeMap<String, String>,

    pub x_axis_field: Option<String>,
    pub y_axis_field: Option<String>,
    /// KPI cards.
    pub value_field: Option<String>,
    /// Pie charts.
    pub label_field: Option<String>,

    /// 0 disables auto-refresh.
    pub refresh_interval_seconds: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: "New Widget".to_string(),
            widget_type: WidgetType::default(),
            row: 1,
            column: 1,
            width: 6,
            height: 2,
            endpoint_path: None,
            endpoint_template: None,
            endpoint_method: "GET".to_string(),
            display_fields: Vec::new(),
            filters: BTreeMap::new(),
            x_axis_field: None,
            y_axis_field: None,
            value_field: None,
            label_field: None,
            refresh_interval_seconds: 0,
        }
    }
}
