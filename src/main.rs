//! Solana swap console
//! High-level architecture:
//! - Wallet session backed by a configured keypair
//! - Read-only balance queries via Solana RPC
//! - Swap form state and validation; swap execution is future work
//! - Interactive command loop over stdin

mod app;
mod balances;
mod command;
mod config;
mod form;
mod tokens;
mod wallet;

use anyhow::Result;
use app::App;
use config::AppConfig;
use structopt::StructOpt;
use tokio::signal;

#[derive(StructOpt, Debug)]
#[structopt(name = "solana_swap_console")]
struct Cli {
    /// Path to config file
    #[structopt(short, long, default_value = "swap.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::from_args();
    let cfg = AppConfig::from_file(&args.config)?;

    let mut app = App::new(cfg);

    tokio::select! {
        res = app.run() => res?,
        _ = signal::ctrl_c() => {
            log::info!("Shutdown signal received");
        }
    }
    app.shutdown().await;
    Ok(())
}
