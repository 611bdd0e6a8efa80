//! Route definitions and router construction.

use axum::Router;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Build the page and API routes, without state applied.
pub(crate) fn app_routes() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(handlers::pages::index))
        .route("/search", get(handlers::pages::search))
        .route("/recipe/{id}", get(handlers::pages::recipe))
        .route("/create", get(handlers::pages::create_form))
        // JSON API
        .route("/api/receipts", post(handlers::recipes::create))
}

/// Create the main Axum router.
///
/// Serves the page and API routes plus the contents of `static_dir`
/// under `/static`. Every request is traced.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router<P: AsRef<Path>>(ctx: AxumContext, static_dir: P) -> Router {
    let state: AppState = Arc::new(ctx);

    app_routes()
        .with_state(state)
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
