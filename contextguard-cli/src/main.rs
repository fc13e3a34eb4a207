//! ContextGuard command-line interface

use anyhow::Result;
use clap::Parser;
use contextguard_cli::commands::Commands;

/// Locate the main content of a page and adapt it offline
#[derive(Debug, Parser)]
#[command(name = "contextguard", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute().await
}
