//! Layout Mockup Web Server Binary
//!
//! This binary starts the web server that exposes the layout store as a
//! REST API for a browser frontend.
//!
//! # Usage
//!
//! ```bash
//! # Start with settings from the config file (default 127.0.0.1:3001)
//! layout-mockup-web
//!
//! # Override port and seed
//! layout-mockup-web --port 8080 --seed ./crm_layout.json
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use layout_mockup::config::Config;
use layout_mockup::web;

/// Layout Mockup Web Server - REST API for the layout editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to `server.port` from the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to `server.host` from the config file)
    #[arg(long)]
    host: Option<String>,

    /// Config file to use instead of the platform default
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed definition used for new sessions instead of the configured one
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load configuration")?,
    };

    if let Some(seed) = args.seed {
        config.paths.seed_file = Some(seed);
        config.validate()?;
    }

    match &config.paths.seed_file {
        Some(path) => info!("Seed: {}", path.display()),
        None => info!("Seed: built-in"),
    }

    // Build socket address
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid listen address {host}:{port}"))?;

    // Start the server
    web::run_server(config, addr).await
}
