//! Row mapping helpers for `SQLite` queries.

use receiptkins_core::{Recipe, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for recipe queries.
pub const RECIPE_SELECT_COLUMNS: &str = "id, name, ingredients, algorithm, author";

/// Parse a database row into a Recipe.
pub fn row_to_recipe(row: &SqliteRow) -> Result<Recipe, RepositoryError> {
    let column = |name: &str| -> Result<String, RepositoryError> {
        row.try_get(name)
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    };

    Ok(Recipe {
        id: row
            .try_get::<i64, _>("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        name: column("name")?,
        ingredients: column("ingredients")?,
        algorithm: column("algorithm")?,
        author: column("author")?,
    })
}
