//! Document sources: where the OpenAPI document bytes come from.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::CatalogError;

/// Supplies the raw bytes of the OpenAPI document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Read the whole document. A missing document is
    /// [`CatalogError::NotFound`].
    async fn read_document(&self) -> Result<Vec<u8>, CatalogError>;

    /// Human-readable location for logging.
    fn describe(&self) -> String;
}

/// Reads the document from a file on disk.
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    path: PathBuf,
}

impl FileDocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn read_document(&self) -> Result<Vec<u8>, CatalogError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| read_error(&self.path, e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Blocking read of a document file, with the same error mapping as
/// [`FileDocumentSource`].
pub fn read_document_file(path: &Path) -> Result<Vec<u8>, CatalogError> {
    std::fs::read(path).map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, e: io::Error) -> CatalogError {
    match e.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound(path.display().to_string()),
        _ => CatalogError::Io(e),
    }
}

/// Serves a document already held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticDocumentSource {
    bytes: Vec<u8>,
}

impl StaticDocumentSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for StaticDocumentSource {
    async fn read_document(&self) -> Result<Vec<u8>, CatalogError> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("<in-memory, {} bytes>", self.bytes.len())
    }
}
