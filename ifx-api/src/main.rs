//! ifx-api - JSON interval checking service
//!
//! Checks whether three judges' scores are within the maximum interval and
//! returns adjusted scores when they are not.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ifx_api::{build_router, AppState};
use ifx_common::config::{self, DEFAULT_API_PORT};
use ifx_common::shutdown::shutdown_signal;
use tracing::info;

/// Command-line arguments for ifx-api
#[derive(Parser, Debug)]
#[command(name = "ifx-api")]
#[command(about = "JSON API for checking and fixing judge score intervals")]
#[command(version)]
struct Args {
    /// Address to bind (overrides config file)
    #[arg(long, env = "IFX_API_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "IFX_API_PORT")]
    port: Option<u16>,

    /// Path to TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = config::resolve_config_path(args.config.as_deref());
    let toml_config =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let level = toml_config.logging.level.to_lowercase();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ifx_api={level},ifx_common={level},tower_http={level}").into()
            }),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Interval Fixer API (ifx-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &config_path {
        Some(path) if path.exists() => info!("Config file: {}", path.display()),
        Some(path) => info!("Config file {} not found, using defaults", path.display()),
        None => info!("No config file, using compiled defaults"),
    }
    info!("{} interval presets configured", toml_config.api_presets.len());

    let host = toml_config.api.resolve_host(args.host.as_deref());
    let port = toml_config.api.resolve_port(args.port, DEFAULT_API_PORT);
    let ip: IpAddr = host
        .parse()
        .with_context(|| format!("Invalid bind address: {}", host))?;
    let addr = SocketAddr::new(ip, port);

    let state = AppState::new(toml_config.api_presets);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("ifx-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}
