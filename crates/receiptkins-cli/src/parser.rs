//! Command-line arguments for the receiptkins server.

use std::path::PathBuf;

use clap::Parser;
use receiptkins_axum::{DEFAULT_PORT, DEFAULT_STATIC_DIR, ServerConfig};

/// Serve the receiptkins recipe catalog over HTTP.
#[derive(Debug, Parser)]
#[command(name = "receiptkins")]
#[command(about = "Browse, search and add recipes from a web browser")]
#[command(version)]
pub struct Cli {
    /// Store connection string. Overrides `DATABASE_URL`.
    #[arg(long = "database-url", value_name = "URL")]
    pub database_url: Option<String>,

    /// Port to listen on
    #[arg(long, env = "RECEIPTKINS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory served under /static
    #[arg(long = "static-dir", env = "RECEIPTKINS_STATIC_DIR", value_name = "DIR",
          default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,
}

impl Cli {
    /// Build the server configuration from parsed arguments.
    pub fn server_config(&self) -> ServerConfig {
        let config = ServerConfig::with_defaults()
            .with_port(self.port)
            .with_static_dir(self.static_dir.clone());

        match &self.database_url {
            Some(url) => config.with_database_url(url.clone()),
            None => config,
        }
    }
}
