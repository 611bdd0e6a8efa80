//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for opening the
//! `SQLite` pool and ensuring the `receipts` table exists. Entry points call
//! this with the resolved database URL.

use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Opens the `SQLite` connection pool and ensures the schema exists.
///
/// This function:
/// 1. Parses the connection URL
/// 2. Creates the database file if it doesn't exist
/// 3. Opens the pool (which connects once, so an unreachable store fails here)
/// 4. Creates the `receipts` table if missing
///
/// # Errors
///
/// Returns an error if:
/// - The URL is not a valid `SQLite` connection string
/// - The database file cannot be opened or created
/// - Schema creation fails
///
/// # Example
///
/// ```rust,no_run
/// use receiptkins_db::setup_database;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database("sqlite://receiptkins.db?mode=rwc").await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("Invalid SQLite connection URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    create_schema(&pool).await?;

    tracing::info!(target: "receiptkins.db", "Database connected successfully");
    Ok(pool)
}

/// Sets up an isolated in-memory `SQLite` database for testing.
///
/// The pool is pinned to a single connection that is never recycled:
/// every `sqlite::memory:` connection is its own database, so a second
/// connection would not see the schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the `receipts` table.
///
/// Safe to call multiple times as it uses IF NOT EXISTS.
pub(crate) async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS receipts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            ingredients TEXT NOT NULL DEFAULT '',
            algorithm TEXT NOT NULL DEFAULT '',
            author TEXT NOT NULL DEFAULT ''
        )
        ",
    )
    .execute(pool)
    .await
    .context("Failed to create receipts table")?;

    Ok(())
}
