//! Glacial lake hazard map service.
//!
//! Loads a hazard probability table and serves an interactive Leaflet
//! viewer, or writes a standalone map page with `--export`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hazard_map::config::ViewerConfig;
use hazard_map::server;
use hazard_map::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "hazard-map")]
#[command(about = "Glacial lake outburst flood hazard map viewer")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hazard probability CSV (overrides config)
    #[arg(short, long, env = "HAZARD_DATA")]
    data: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// Write a standalone map page to this path and exit
    #[arg(long)]
    export: Option<PathBuf>,

    /// Basemap identifier (overrides config)
    #[arg(long)]
    basemap: Option<String>,

    /// Initial zoom level (overrides config)
    #[arg(long)]
    zoom: Option<u8>,

    /// Cluster nearby markers
    #[arg(long)]
    cluster: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting hazard map viewer");

    // Load configuration, then apply CLI overrides
    let mut config = ViewerConfig::load(args.config.as_deref())?;
    if let Some(data) = &args.data {
        config.data = data.display().to_string();
    }
    if let Some(listen) = &args.listen {
        config.listen = listen.clone();
    }
    if let Some(basemap) = &args.basemap {
        config.map.basemap = basemap.parse()?;
    }
    if let Some(zoom) = args.zoom {
        config.map.zoom = zoom;
    }
    if args.cluster {
        config.map.cluster = true;
    }

    let state = Arc::new(AppState::build(config)?);

    // Export mode writes the document and exits without serving
    if let Some(path) = &args.export {
        let document =
            renderer::MapDocument::build(&state.config.map, &state.markers, &state.scale)?;
        document.write_standalone(path)?;
        info!(path = %path.display(), "Export complete");
        return Ok(());
    }

    server::start_server(state).await
}
