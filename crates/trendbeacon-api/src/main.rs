//! Main entry point for the `TrendBeacon` server

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use trendbeacon_api::build_router;
use trendbeacon_core::{Config, Error, Result, init_logging};

/// Command line interface for the dashboard server
#[derive(Debug, Parser)]
#[command(
    name = "trendbeacon-server",
    version = env!("CARGO_PKG_VERSION"),
    about = "TrendBeacon dashboard server and TikTok login bridge"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "TRENDBEACON_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env is normal outside development
    let dotenv = dotenvy::dotenv();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    init_logging(&config.logging)?;
    if let Err(e) = dotenv {
        info!("No .env file loaded: {}", e);
    }

    info!("╔══════════════════════════════════════════════════════════╗");
    info!(
        "║           TrendBeacon Dashboard Server v{}            ║",
        env!("CARGO_PKG_VERSION")
    );
    info!("╚══════════════════════════════════════════════════════════╝");
    if !config.tiktok.has_credentials() {
        warn!("TikTok credentials not set; /login is disabled and the dashboard shows sample data");
    }

    let app = build_router(config.clone())?
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr: SocketAddr = config.bind_address().parse().map_err(|e| Error::Configuration {
        message: format!("Invalid server address {}: {e}", config.bind_address()),
    })?;
    let listener = TcpListener::bind(&addr).await?;

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║                     SERVER READY                         ║");
    info!("╟──────────────────────────────────────────────────────────╢");
    info!("║ 📊 Dashboard: http://{}/trendbeacon.html", addr);
    info!("║ 🔑 Login:     http://{}/login", addr);
    info!("║ 💚 Health:    http://{}/health", addr);
    info!("╚══════════════════════════════════════════════════════════╝");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
