//! MCP Registry Server - read-only HTTP registry of MCP server packages.
//!
//! Loads the catalog once, then serves list and lookup queries over it until
//! SIGINT or SIGTERM.

mod error;
mod handlers;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use mcp_registry_core::{AppConfig, Catalog, QueryEngine, ServerConfig};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "mcp-registry-server")]
#[command(about = "Read-only registry of MCP server packages")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, env = "PORT", default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Catalog file (JSON array of server entries)
    #[arg(long, env = "REGISTRY_CATALOG", default_value = ServerConfig::DEFAULT_CATALOG_FILE)]
    catalog: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting {}", AppConfig::APP_NAME);

    // Nothing is served until the catalog is in memory
    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;
    let engine = QueryEngine::new(catalog);

    // Start the server
    let addr = server::start_server(engine.clone(), &args.host, args.port).await?;

    // Print port for supervisors and tests to read (intentional stdout)
    println!("REGISTRY_PORT={}", addr.port());

    info!("Registry running on http://{}", addr);
    info!("Serving {} servers:", engine.catalog().len());
    for entry in engine.catalog().all() {
        info!("  - {} (v{})", entry.name(), entry.version());
    }
    info!("API endpoints:");
    info!("  GET {}/servers", AppConfig::API_VERSION_PREFIX);
    info!("  GET {}/servers/{{name}}", AppConfig::API_VERSION_PREFIX);
    info!("  GET /health");

    // Wait for shutdown signal
    let signal = shutdown_signal().await?;
    info!("{} received, exiting", signal);

    Ok(())
}

/// Resolve on SIGINT, or SIGTERM on unix.
async fn shutdown_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res?;
                Ok("SIGINT")
            }
            _ = terminate.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok("Ctrl-C")
    }
}
