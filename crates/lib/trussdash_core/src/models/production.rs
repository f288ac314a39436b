//! Production tracking models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stage of a component on the shop floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductionStatus {
    #[default]
    Pending,
    Cutting,
    Assembling,
    Packing,
    Shipped,
}

/// Production data for a single component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductionData {
    pub component_guid: String,
    pub status: ProductionStatus,
    /// Hours spent in each stage.
    pub time_in_stages: BTreeMap<ProductionStatus, f64>,
    pub labor_cost: f64,
    pub projected_start_time: Option<DateTime<Utc>>,
    pub projected_end_time: Option<DateTime<Utc>>,
    pub projected_production_date: Option<DateTime<Utc>>,
}

impl ProductionData {
    pub fn new(component_guid: impl Into<String>) -> Self {
        Self {
            component_guid: component_guid.into(),
            ..Self::default()
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.time_in_stages.values().sum()
    }
}
