//! OpenAPI catalog: a flat index of GET endpoints and component schemas.
//!
//! Turns the vendor's OpenAPI document into the data the widget
//! configuration flow needs: which endpoints exist, what parameters they take
//! and what shape their responses have.
//!
//! # Public API
//!
//! - [`parse_document`]: strict parse of raw document bytes
//! - [`load_document`]: strict, blocking read and parse of a document file
//! - [`schemas::extract_schemas`]: `components.schemas` → schema mapping
//! - [`endpoints::extract_endpoints`]: `paths` → sorted GET endpoints
//! - [`service::CatalogService`]: memoized, fail-soft catalog access
//!
//! References are resolved shallowly: a `$ref` becomes a bare schema name and
//! is never inlined.

pub mod endpoints;
pub mod json;
pub mod model;
pub mod schemas;
pub mod service;
pub mod source;

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

pub use model::{
    Catalog, EndpointCatalogEntry, ParameterDescriptor, ParameterLocation, PropertyDescriptor,
    ResponseShape, SchemaCatalogEntry,
};
pub use service::CatalogService;
pub use source::{DocumentSource, FileDocumentSource, StaticDocumentSource, read_document_file};

/// Errors reading or parsing the OpenAPI document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("OpenAPI document not found: {0}")]
    NotFound(String),

    #[error("Failed to read OpenAPI document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed OpenAPI document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse raw document bytes into a catalog.
///
/// Fails only when the bytes are not JSON; anything structurally odd inside
/// a valid JSON document degrades to defaults.
pub fn parse_document(bytes: &[u8]) -> Result<Catalog, CatalogError> {
    let doc: Value = serde_json::from_slice(bytes)?;
    Ok(Catalog {
        schemas: schemas::extract_schemas(&doc),
        endpoints: endpoints::extract_endpoints(&doc),
    })
}

/// Read and parse a document file. Missing or malformed documents are errors.
pub fn load_document(path: &Path) -> Result<Catalog, CatalogError> {
    parse_document(&read_document_file(path)?)
}
