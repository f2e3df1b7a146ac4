//! # Rowkeeper Server
//!
//! HTTP backend for a large, searchable, user-reorderable list.
//!
//! ## Overview
//!
//! - **Listing**: paged reads with substring search over a generated
//!   in-memory collection
//! - **Custom order**: a server-held id ranking applied to every read
//! - **Selection**: one global set of selected ids, returned with every page
//!
//! Configuration is layered: defaults, then an optional TOML file, then the
//! environment (including `.env`), then the flags below.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rowkeeper_config::{Config, ConfigLoad, ConfigLoader};
use rowkeeper_server::{create_app, infra::startup::build_app_state};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "rowkeeper-server")]
#[command(about = "Paged, searchable, reorderable list API")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "ROWKEEPER_CONFIG")]
    config: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Number of generated items (overrides config)
    #[arg(long)]
    dataset_size: Option<u64>,

    /// Skip loading `.env` from the working directory
    #[arg(long, default_value_t = false)]
    no_env_file: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(&cli)?;
    let addr = config.bind_address();

    let state = build_app_state(config.clone())
        .context("failed to build the list service")?;
    let app = create_app(state);

    info!(
        "Starting Rowkeeper server on {}:{}",
        config.server.host, config.server.port
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_config_path(path);
    }
    if cli.no_env_file {
        loader = loader.without_env_file();
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host.clone() {
        config.server.host = host;
    }
    if let Some(size) = cli.dataset_size {
        config.dataset.size = size;
    }

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    info!(
        dataset.size = config.dataset.size,
        dataset.label_prefix = %config.dataset.label_prefix,
        paging.default_limit = config.paging.default_limit,
        cors.origins = ?config.cors.allowed_origins,
        "configuration in effect"
    );

    Ok(config)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
