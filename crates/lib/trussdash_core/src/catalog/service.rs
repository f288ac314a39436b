//! Catalog service: builds the catalog once and serves read-only views.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::model::{Catalog, EndpointCatalogEntry, SchemaCatalogEntry};
use super::source::DocumentSource;
use super::{CatalogError, parse_document};

/// Lazily built, process-lifetime catalog.
///
/// The first caller reads and parses the document; concurrent first callers
/// wait on the same initialization and all observe the same `Arc<Catalog>`.
/// There is no refresh: a changed document is picked up on restart.
pub struct CatalogService {
    source: Box<dyn DocumentSource>,
    catalog: OnceCell<Arc<Catalog>>,
}

impl CatalogService {
    pub fn new(source: impl DocumentSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            catalog: OnceCell::new(),
        }
    }

    /// The memoized catalog, building it on first access.
    pub async fn catalog(&self) -> Arc<Catalog> {
        self.catalog
            .get_or_init(|| async { Arc::new(self.build().await) })
            .await
            .clone()
    }

    /// Whether the catalog has been built yet.
    pub fn is_built(&self) -> bool {
        self.catalog.initialized()
    }

    pub async fn endpoints(&self) -> Vec<EndpointCatalogEntry> {
        self.catalog().await.endpoints.clone()
    }

    pub async fn schemas(&self) -> BTreeMap<String, SchemaCatalogEntry> {
        self.catalog().await.schemas.clone()
    }

    /// Endpoints grouped by tag, each group in catalog order.
    pub async fn endpoints_by_tag(&self) -> BTreeMap<String, Vec<EndpointCatalogEntry>> {
        self.catalog().await.endpoints_by_tag()
    }

    pub async fn schema(&self, name: &str) -> Option<SchemaCatalogEntry> {
        self.catalog().await.schema(name).cloned()
    }

    pub async fn find_endpoint(&self, path: &str) -> Option<EndpointCatalogEntry> {
        self.catalog().await.endpoint(path).cloned()
    }

    async fn build(&self) -> Catalog {
        match self.try_build().await {
            Ok(catalog) => {
                info!(
                    endpoints = catalog.endpoints.len(),
                    schemas = catalog.schemas.len(),
                    "parsed OpenAPI document"
                );
                catalog
            }
            Err(e) => {
                warn!(source = %self.source.describe(), "OpenAPI catalog unavailable: {e}");
                Catalog::empty()
            }
        }
    }

    async fn try_build(&self) -> Result<Catalog, CatalogError> {
        let bytes = self.source.read_document().await?;
        parse_document(&bytes)
    }
}
