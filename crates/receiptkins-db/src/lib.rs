#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Linked for the bundled SQLite build; not referenced directly.
use libsqlite3_sys as _;

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::RepoFactory;

#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::SqliteRecipeRepository;

// Adapters hold the pool only to close it on shutdown.
pub use sqlx::SqlitePool;

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
