use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_core::{AddressListController, AlwaysConfirm, HttpAddressStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod confirm;
mod shell;

use config::load_settings;
use confirm::StdinConfirm;

#[derive(Parser, Debug)]
#[command(about = "Manage a list of postal addresses kept by a remote address store")]
struct Args {
    /// Base URL of the address store; overrides config and environment.
    #[arg(long)]
    store_url: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skip delete confirmations.
    #[arg(long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(store_url) = args.store_url {
        settings.store_url = store_url;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(store_url = %settings.store_url, "address_cli starting");
    let store = HttpAddressStore::new(settings.store_url);
    if args.yes {
        shell::run(AddressListController::new(store, AlwaysConfirm)).await
    } else {
        shell::run(AddressListController::new(store, StdinConfirm)).await
    }
}
