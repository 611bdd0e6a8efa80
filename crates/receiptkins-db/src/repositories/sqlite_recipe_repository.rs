//! `SQLite` implementation of the `RecipeRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use receiptkins_core::{NewRecipe, Recipe, RecipeRepository, RepositoryError};

use super::row_mappers::{RECIPE_SELECT_COLUMNS, row_to_recipe};

/// `SQLite` implementation of the `RecipeRepository` trait.
///
/// Holds a connection pool; the pool is safe to share across concurrent
/// requests and no extra locking is done here.
pub struct SqliteRecipeRepository {
    pool: SqlitePool,
}

impl SqliteRecipeRepository {
    /// Create a new `SQLite` recipe repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RecipeRepository for SqliteRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>, RepositoryError> {
        let query = format!("SELECT {RECIPE_SELECT_COLUMNS} FROM receipts ORDER BY id DESC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_recipe).collect()
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Recipe>, RepositoryError> {
        // SQLite LIKE and lower() fold ASCII only; match in Rust instead.
        let recipes = self.list().await?;
        Ok(recipes
            .into_iter()
            .filter(|recipe| recipe.matches_name(query))
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Recipe, RepositoryError> {
        let query = format!("SELECT {RECIPE_SELECT_COLUMNS} FROM receipts WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Recipe with ID {id}")))?;

        row_to_recipe(&row)
    }

    async fn insert(&self, recipe: &NewRecipe) -> Result<Recipe, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO receipts (name, ingredients, algorithm, author) VALUES (?, ?, ?, ?)",
        )
        .bind(&recipe.name)
        .bind(&recipe.ingredients)
        .bind(&recipe.algorithm)
        .bind(&recipe.author)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(recipe.clone().with_id(result.last_insert_rowid()))
    }
}
