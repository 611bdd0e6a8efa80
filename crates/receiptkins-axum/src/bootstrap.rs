//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. The store is opened here and handed down to the
//! router as an injected dependency.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use receiptkins_core::{DatabaseUrlSource, RecipeService, resolve_database_url};
use receiptkins_db::{RepoFactory, SqlitePool, setup_database};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Explicit store connection string. `None` defers to `DATABASE_URL`
    /// and then the local development default.
    pub database_url: Option<String>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Create config with default port and static directory.
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Set the HTTP port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set an explicit database URL.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the static directory.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = path.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
///
/// Holds the services handlers need. Construct it from a pool in
/// production or from any `RecipeService` in tests.
pub struct AxumContext {
    /// Recipe browsing and creation.
    pub recipes: Arc<RecipeService>,
}

impl AxumContext {
    /// Wrap an already-built service.
    pub const fn new(recipes: Arc<RecipeService>) -> Self {
        Self { recipes }
    }

    /// Build the context on top of a `SQLite` pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(Arc::new(RepoFactory::recipe_service(pool)))
    }
}

/// Resolve the database URL and open the store.
///
/// Falls back to the local development default when neither the config
/// nor `DATABASE_URL` provides one.
pub async fn open_store(config: &ServerConfig) -> Result<SqlitePool> {
    let resolution = resolve_database_url(config.database_url.as_deref());

    if resolution.source == DatabaseUrlSource::Default {
        warn!(
            target: "receiptkins.config",
            database_url = %resolution.url,
            "DATABASE_URL not set, using local development default"
        );
    } else {
        info!(
            target: "receiptkins.config",
            database_url = %resolution.redacted(),
            source = ?resolution.source,
            "Resolved database URL"
        );
    }

    setup_database(&resolution.url).await
}

/// Start the web server.
///
/// Opens the store, binds the listener and serves until Ctrl+C or
/// SIGTERM. The pool is closed after the server has drained.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let pool = open_store(&config).await?;
    let ctx = AxumContext::from_pool(pool.clone());

    info!("Serving static assets from: {}", config.static_dir.display());
    let app = crate::routes::create_router(ctx, &config.static_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("receiptkins listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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
