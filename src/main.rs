//! Demo web server binary.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webdemo::config::{self, ServerConfig};
use webdemo::http::HttpServer;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "webdemo", about = "Minimal demonstration web server")]
struct Args {
    /// Path to a TOML configuration file; built-in defaults apply when
    /// omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webdemo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("webdemo v0.1.0 starting");

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => ServerConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        template_dir = %config.templates.dir,
        template_debug = config.templates.debug,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
