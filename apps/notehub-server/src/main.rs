//! notehub-server - NoteHub admin API server

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notehub_server::{App, AppConfig, logging};
use tracing::{error, info};

/// NoteHub admin server
#[derive(Parser, Debug)]
#[command(name = "notehub-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long, global = true)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Start the server (default)
    Run,
    /// Validate configuration and module wiring, then exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        let rendered =
            serde_json::to_string_pretty(&cfg).context("failed to render configuration")?;
        println!("{rendered}");
        return Ok(());
    }

    logging::init(&cfg.logging)?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Check => {
            App::build(&cfg)?;
            info!("Configuration OK");
            Ok(())
        }
        Command::Run => {
            let app = App::build(&cfg)?;
            let listener = app.bind().await?;
            app.serve(listener, shutdown_signal()).await
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
