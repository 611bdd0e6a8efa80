//! CLI entry point - the composition root for the binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use receiptkins_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.server_config();

    if let Err(e) = receiptkins_axum::start_server(config).await {
        tracing::error!("Server exited with error: {e:#}");
        return Err(e);
    }

    Ok(())
}
