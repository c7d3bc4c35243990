//! DevOps Info Service - Main entry point

use anyhow::Result;
use clap::Parser;
use info_service::{api, config::Config, daemon::shutdown::shutdown_signal, utils, AppState};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Interface to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    // Initialize logging
    utils::logger::init(config.effective_log_level())?;

    tracing::info!(
        "Starting {} v{}",
        config.service_name,
        config.service_version
    );
    tracing::info!(
        host = %config.host,
        port = config.port,
        debug = config.debug,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;

    // Start time is captured once the listener is ready, just before serving
    let state = Arc::new(AppState::new(config));
    let app = api::create_router(state);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Health endpoint: http://{}/health", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Shutting down service...");

    Ok(())
}
