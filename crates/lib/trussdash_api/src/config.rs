//! API server configuration.

use std::path::PathBuf;

use trussdash_core::vendor::VendorConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3100";
pub const DEFAULT_DOCUMENT_PATH: &str = "v1.json";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3100").
    pub bind_addr: String,
    /// OpenAPI document the endpoint catalog is built from.
    pub document_path: PathBuf,
    /// Truss-design API connection.
    pub vendor: VendorConfig,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                | Default                                  |
    /// |-------------------------|------------------------------------------|
    /// | `BIND_ADDR`             | `127.0.0.1:3100`                         |
    /// | `OPENAPI_DOCUMENT_PATH` | `v1.json`                                |
    /// | `PARAGON_API_BASE_URL`  | `https://designserver.paragontruss.com/` |
    /// | `PARAGON_API_KEY`       | unset                                    |
    /// | `VENDOR_TIMEOUT_SECS`   | `30`                                     |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            document_path: std::env::var("OPENAPI_DOCUMENT_PATH")
                .unwrap_or_else(|_| DEFAULT_DOCUMENT_PATH.into())
                .into(),
            vendor: VendorConfig::from_env(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            document_path: DEFAULT_DOCUMENT_PATH.into(),
            vendor: VendorConfig::default(),
        }
    }
}
