//! In-memory dashboard store.

use tokio::sync::RwLock;
use tracing::debug;

use super::{DashboardError, validate_position, validate_size, validate_widget};
use crate::models::dashboard::{DEFAULT_DASHBOARD_NAME, DashboardConfiguration, WidgetConfig};

#[derive(Debug, Default)]
struct StoreState {
    dashboards: Vec<DashboardConfiguration>,
    current: Option<String>,
}

impl StoreState {
    fn dashboard_mut(&mut self, id: &str) -> Result<&mut DashboardConfiguration, DashboardError> {
        self.dashboards
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| DashboardError::NotFound(id.to_string()))
    }
}

/// Holds every dashboard plus the currently selected one.
///
/// All reads return copies; nothing outside the store mutates a dashboard.
#[derive(Debug, Default)]
pub struct DashboardStore {
    state: RwLock<StoreState>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All dashboards in creation order.
    pub async fn list(&self) -> Vec<DashboardConfiguration> {
        self.state.read().await.dashboards.clone()
    }

    pub async fn get(&self, id: &str) -> Result<DashboardConfiguration, DashboardError> {
        self.state
            .read()
            .await
            .dashboards
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| DashboardError::NotFound(id.to_string()))
    }

    /// Create a dashboard and make it current.
    pub async fn create(&self, name: &str) -> Result<DashboardConfiguration, DashboardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DashboardError::Validation(
                "dashboard name must not be empty".into(),
            ));
        }
        let dashboard = DashboardConfiguration::new(name);
        let mut state = self.state.write().await;
        state.dashboards.push(dashboard.clone());
        state.current = Some(dashboard.id.clone());
        debug!(id = %dashboard.id, name, "created dashboard");
        Ok(dashboard)
    }

    /// Select the first dashboard, creating the default one if none exist.
    pub async fn get_or_create_default(&self) -> DashboardConfiguration {
        let mut state = self.state.write().await;
        if state.dashboards.is_empty() {
            state
                .dashboards
                .push(DashboardConfiguration::new(DEFAULT_DASHBOARD_NAME));
            debug!("created default dashboard");
        }
        let first = state.dashboards[0].clone();
        state.current = Some(first.id.clone());
        first
    }

    pub async fn current(&self) -> Option<DashboardConfiguration> {
        let state = self.state.read().await;
        let id = state.current.as_deref()?;
        state.dashboards.iter().find(|d| d.id == id).cloned()
    }

    pub async fn set_current(&self, id: &str) -> Result<DashboardConfiguration, DashboardError> {
        let mut state = self.state.write().await;
        let dashboard = state.dashboard_mut(id)?.clone();
        state.current = Some(dashboard.id.clone());
        Ok(dashboard)
    }

    /// Delete a dashboard. If it was current, the first remaining one becomes
    /// current.
    pub async fn delete(&self, id: &str) -> Result<(), DashboardError> {
        let mut state = self.state.write().await;
        let before = state.dashboards.len();
        state.dashboards.retain(|d| d.id != id);
        if state.dashboards.len() == before {
            return Err(DashboardError::NotFound(id.to_string()));
        }
        if state.current.as_deref() == Some(id) {
            state.current = state.dashboards.first().map(|d| d.id.clone());
        }
        debug!(id, "deleted dashboard");
        Ok(())
    }

    pub async fn add_widget(
        &self,
        dashboard_id: &str,
        widget: WidgetConfig,
    ) -> Result<WidgetConfig, DashboardError> {
        validate_widget(&widget)?;
        let mut state = self.state.write().await;
        let dashboard = state.dashboard_mut(dashboard_id)?;
        if dashboard.widget(&widget.id).is_some() {
            return Err(DashboardError::Validation(format!(
                "widget {} already exists",
                widget.id
            )));
        }
        dashboard.widgets.push(widget.clone());
        dashboard.touch();
        Ok(widget)
    }

    /// Replace a widget wholesale, matched by id.
    pub async fn update_widget(
        &self,
        dashboard_id: &str,
        widget: WidgetConfig,
    ) -> Result<WidgetConfig, DashboardError> {
        validate_widget(&widget)?;
        let mut state = self.state.write().await;
        let dashboard = state.dashboard_mut(dashboard_id)?;
        let slot = dashboard
            .widget_mut(&widget.id)
            .ok_or_else(|| DashboardError::WidgetNotFound(widget.id.clone()))?;
        *slot = widget.clone();
        dashboard.touch();
        Ok(widget)
    }

    pub async fn remove_widget(
        &self,
        dashboard_id: &str,
        widget_id: &str,
    ) -> Result<(), DashboardError> {
        let mut state = self.state.write().await;
        let dashboard = state.dashboard_mut(dashboard_id)?;
        let before = dashboard.widgets.len();
        dashboard.widgets.retain(|w| w.id != widget_id);
        if dashboard.widgets.len() == before {
            return Err(DashboardError::WidgetNotFound(widget_id.to_string()));
        }
        dashboard.touch();
        Ok(())
    }

    pub async fn move_widget(
        &self,
        dashboard_id: &str,
        widget_id: &str,
        row: u32,
        column: u32,
    ) -> Result<WidgetConfig, DashboardError> {
        validate_position(row, column)?;
        self.edit_widget(dashboard_id, widget_id, |widget| {
            validate_size(column, widget.width, widget.height)?;
            widget.row = row;
            widget.column = column;
            Ok(())
        })
        .await
    }

    pub async fn resize_widget(
        &self,
        dashboard_id: &str,
        widget_id: &str,
        width: u32,
        height: u32,
    ) -> Result<WidgetConfig, DashboardError> {
        self.edit_widget(dashboard_id, widget_id, |widget| {
            validate_size(widget.column, width, height)?;
            widget.width = width;
            widget.height = height;
            Ok(())
        })
        .await
    }

    async fn edit_widget(
        &self,
        dashboard_id: &str,
        widget_id: &str,
        edit: impl FnOnce(&mut WidgetConfig) -> Result<(), DashboardError>,
    ) -> Result<WidgetConfig, DashboardError> {
        let mut state = self.state.write().await;
        let dashboard = state.dashboard_mut(dashboard_id)?;
        let widget = dashboard
            .widget_mut(widget_id)
            .ok_or_else(|| DashboardError::WidgetNotFound(widget_id.to_string()))?;
        edit(widget)?;
        let updated = widget.clone();
        dashboard.touch();
        Ok(updated)
    }
}
