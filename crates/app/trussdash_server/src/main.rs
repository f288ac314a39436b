//! Trussdash API server binary.
//!
//! Serves the dashboard API over HTTP until interrupted with Ctrl-C.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use trussdash_api::config::{ApiConfig, DEFAULT_BIND_ADDR, DEFAULT_DOCUMENT_PATH};
use trussdash_core::vendor::VendorConfig;
use trussdash_core::vendor::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "trussdash_server", about = "Trussdash API server", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind_addr: String,

    /// OpenAPI document describing the truss-design API.
    #[arg(long, env = "OPENAPI_DOCUMENT_PATH", default_value = DEFAULT_DOCUMENT_PATH)]
    document: PathBuf,

    /// Base URL of the truss-design API.
    #[arg(long, env = "PARAGON_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    vendor_url: String,

    /// API key sent as `Authorization: JWT <key>`.
    #[arg(long, env = "PARAGON_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Vendor request timeout in seconds.
    #[arg(long, env = "VENDOR_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    vendor_timeout_secs: u64,

    /// Build the endpoint catalog before accepting requests.
    #[arg(long, default_value_t = false)]
    warm_catalog: bool,
}

impl Args {
    fn into_config(self) -> ApiConfig {
        ApiConfig {
            bind_addr: self.bind_addr,
            document_path: self.document,
            vendor: VendorConfig {
                base_url: self.vendor_url,
                api_key: self.api_key.filter(|k| !k.is_empty()),
                timeout: Duration::from_secs(self.vendor_timeout_secs),
            },
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,trussdash_api=debug,trussdash_core=debug")
            }),
        )
        .init();

    let args = Args::parse();
    let warm_catalog = args.warm_catalog;
    let config = args.into_config();

    info!(
        bind_addr = %config.bind_addr,
        document = %config.document_path.display(),
        vendor = %config.vendor.base_url,
        "starting trussdash_server"
    );

    let state = trussdash_api::AppState::new(config.clone())?;

    if warm_catalog {
        let catalog = state.catalog.catalog().await;
        if catalog.is_empty() {
            warn!("endpoint catalog is empty; widgets cannot be bound to endpoints");
        }
    }

    let app = trussdash_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}
