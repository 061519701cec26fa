//! ifx-ui - interactive interval form
//!
//! Serves an HTML form for checking three judges' scores against a preset
//! maximum interval.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ifx_common::config::{self, DEFAULT_UI_PORT};
use ifx_common::shutdown::shutdown_signal;
use ifx_ui::{build_router, UiState};
use tracing::info;

/// Command-line arguments for ifx-ui
#[derive(Parser, Debug)]
#[command(name = "ifx-ui")]
#[command(about = "Interactive form for checking and fixing judge score intervals")]
#[command(version)]
struct Args {
    /// Address to bind (overrides config file)
    #[arg(long, env = "IFX_UI_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "IFX_UI_PORT")]
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

    let level = toml_config.logging.level.to_lowercase();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ifx_ui={level},ifx_common={level},tower_http={level}").into()
            }),
        )
        .init();

    info!(
        "Starting Interval Fixer form (ifx-ui) v{}",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(path) = &config_path {
        info!("Config file: {}", path.display());
    }
    info!("{} form presets configured", toml_config.form_presets.len());

    let host = toml_config.ui.resolve_host(args.host.as_deref());
    let port = toml_config.ui.resolve_port(args.port, DEFAULT_UI_PORT);
    let ip: IpAddr = host
        .parse()
        .with_context(|| format!("Invalid bind address: {}", host))?;
    let addr = SocketAddr::new(ip, port);

    let app = build_router(UiState::new(toml_config.form_presets));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("ifx-ui listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}
