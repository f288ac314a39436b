//! Production tracking: per-component shop-floor data held in memory.

use dashmap::DashMap;
use thiserror::Error;

use crate::models::production::ProductionData;

/// Production tracking errors.
#[derive(Debug, Error)]
pub enum ProductionError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Concurrent in-memory store keyed by component GUID.
#[derive(Debug, Default)]
pub struct ProductionTracker {
    store: DashMap<String, ProductionData>,
}

impl ProductionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored data for a component, or a pending record. Reads never store.
    pub fn get(&self, component_guid: &str) -> ProductionData {
        self.store
            .get(component_guid)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| ProductionData::new(component_guid))
    }

    /// Replace the record for `data.component_guid`.
    pub fn update(&self, data: ProductionData) -> Result<ProductionData, ProductionError> {
        if data.component_guid.trim().is_empty() {
            return Err(ProductionError::Validation(
                "componentGuid must not be empty".into(),
            ));
        }
        self.store.insert(data.component_guid.clone(), data.clone());
        Ok(data)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
