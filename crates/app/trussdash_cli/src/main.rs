// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use trussdash_core::catalog::load_document;
use trussdash_core::geometry::member_length;

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Endpoints { document, tag } => {
            let catalog = load_document(&document)?;
            let endpoints: Vec<_> = catalog
                .endpoints
                .iter()
                .filter(|e| tag.as_deref().is_none_or(|t| e.tag == t))
                .collect();
            log::debug!("{} endpoints", endpoints.len());
            println!("{}", serde_json::to_string_pretty(&endpoints)?);
        }
        Commands::Schemas { document, name } => {
            let catalog = load_document(&document)?;
            let out = match name {
                Some(name) => {
                    let schema = catalog
                        .schema(&name)
                        .ok_or_else(|| Error::Custom(format!("schema not found: {name}")))?;
                    serde_json::to_string_pretty(schema)?
                }
                None => serde_json::to_string_pretty(&catalog.schemas)?,
            };
            println!("{out}");
        }
        Commands::MemberLength { points } => {
            println!("{}", member_length(&points));
        }
    }

    Ok(())
}
