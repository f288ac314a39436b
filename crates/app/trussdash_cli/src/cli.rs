use std::path::PathBuf;

use clap::{Parser, Subcommand};
use trussdash_core::geometry::GeometryPoint;

#[derive(Parser, Debug)]
#[command(name = "trussdash_cli", version, about = "Inspect truss-design OpenAPI documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the CLI name and version.
    Version,

    /// Print the GET endpoint catalog of a document as JSON.
    Endpoints {
        /// OpenAPI document (JSON).
        document: PathBuf,

        /// Only endpoints with this tag.
        #[arg(long)]
        tag: Option<String>,
    },

    /// Print the schemas of a document, or a single schema, as JSON.
    Schemas {
        /// OpenAPI document (JSON).
        document: PathBuf,

        /// Schema name.
        name: Option<String>,
    },

    /// Longest distance between any two points, e.g. `0,0 3,4`.
    MemberLength {
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<GeometryPoint>,
    },
}

fn parse_point(raw: &str) -> Result<GeometryPoint, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{raw}'"))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{s}': {e}"))
    };
    Ok(GeometryPoint::new(coord(x)?, coord(y)?))
}
