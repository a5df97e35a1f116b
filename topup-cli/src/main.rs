//! Top-up client
//!
//! Collects a nickname and amount, shows where to pay, and forwards the
//! player's confirmation to the intake service for manual review.

mod app;
mod commands;
mod config;
mod shutdown;
mod state;
mod terminal;
#[cfg(test)]
mod testing;

use clap::Parser;
use commands::Command;
use config::{ConfigLoader, Overrides};
use shutdown::shutdown_signal;
use state::AppState;
use std::path::PathBuf;
use terminal::Terminal;
use topup_core::events::{Notifier, notice_channel};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Top up in-game currency
#[derive(Parser, Debug)]
#[command(name = "topup")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./topup-config.toml")]
    config: PathBuf,

    /// Directory holding the pending request
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Override the intake endpoint
    #[arg(long, env = "TOPUP_INTAKE_ENDPOINT")]
    endpoint: Option<Url>,

    /// Only accept whole-integer amounts ("100.9" is rejected)
    #[arg(long)]
    strict_amount: bool,

    /// Keep the pending request in memory only
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::debug!("Starting topup v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_loader = ConfigLoader::new(
        &args.config,
        Overrides {
            endpoint: args.endpoint,
            store_dir: args.store_dir,
            strict_amount: args.strict_amount,
        },
    );
    let loaded_config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::debug!("Configuration loaded");

    let (notice_tx, notice_rx) = notice_channel();
    let state = AppState::new(loaded_config, Notifier::new(notice_tx), args.ephemeral);
    let mut term = Terminal::stdio(notice_rx);

    let command = args.command.unwrap_or(Command::Interactive);
    tokio::select! {
        result = commands::run(command, &state, &mut term) => result,
        _ = shutdown_signal() => Ok(()),
    }
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so they never mix with the screens on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,topup=info,topup_core=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
