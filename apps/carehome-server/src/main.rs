mod config;
mod logging;
mod signals;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use carehome::CarehomeModule;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::{AppConfig, CliOverrides};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Carehome Server - care-facility administration backend
#[derive(Parser)]
#[command(name = "carehome-server")]
#[command(about = "Carehome Server - care-facility administration backend")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON, secrets omitted) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration, probe the database and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    let overrides = CliOverrides { port: cli.port };
    let config = AppConfig::load(cli.config.as_deref(), &overrides)?;

    logging::init(&config.logging, cli.verbose);

    if cli.print_config {
        println!(
            "Effective configuration:\n{}",
            serde_json::to_string_pretty(&config)?
        );
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config).await,
    }
}

async fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    let module = CarehomeModule::init(&config.carehome).await?;
    module.check().await?;
    println!("Configuration is valid");
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Carehome server starting");

    let module = CarehomeModule::init(&config.carehome).await?;
    let cancel = CancellationToken::new();
    let sweeper = module.spawn_sweeper(cancel.child_token());

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, module.router())
        .with_graceful_shutdown(signals::shutdown(cancel.clone()))
        .await
        .context("server error")?;

    cancel.cancel();
    sweeper.await.context("sweeper task failed")?;
    tracing::info!("Carehome server stopped");
    Ok(())
}
