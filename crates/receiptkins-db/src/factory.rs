//! Composition utilities for building services with `SQLite` backends.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use receiptkins_core::{RecipeRepository, RecipeService};

use crate::repositories::SqliteRecipeRepository;

/// Factory for creating repository and service instances with `SQLite` backends.
pub struct RepoFactory;

impl RepoFactory {
    /// Create a recipe repository from a pool.
    pub fn recipe_repository(pool: SqlitePool) -> Arc<SqliteRecipeRepository> {
        Arc::new(SqliteRecipeRepository::new(pool))
    }

    /// Build a `RecipeService` backed by `SQLite`.
    ///
    /// This is the recommended single-step way for adapters to obtain
    /// the service. Equivalent to:
    ///
    /// ```ignore
    /// let repo: Arc<dyn RecipeRepository> = RepoFactory::recipe_repository(pool);
    /// let service = RecipeService::new(repo);
    /// ```
    pub fn recipe_service(pool: SqlitePool) -> RecipeService {
        let repo: Arc<dyn RecipeRepository> = Self::recipe_repository(pool);
        RecipeService::new(repo)
    }
}

/// Test database helper for integration tests.
///
/// Provides an isolated in-memory `SQLite` database with the production
/// schema already applied. Each `TestDb` is its own store.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a recipe repository using this test database.
    pub fn recipe_repository(&self) -> SqliteRecipeRepository {
        SqliteRecipeRepository::new(self.pool.clone())
    }

    /// Create a recipe service using this test database.
    pub fn recipe_service(&self) -> RecipeService {
        RepoFactory::recipe_service(self.pool.clone())
    }

    /// Count stored recipes, bypassing the repository.
    pub async fn recipe_count(&self) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM receipts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
