#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by integration tests only
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

// Re-export primary types
pub use bootstrap::{
    AxumContext, DEFAULT_PORT, DEFAULT_STATIC_DIR, ServerConfig, open_store, start_server,
};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
