//! Recipe repository trait definition.
//!
//! This port defines the interface for recipe persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewRecipe, Recipe};

/// Repository for recipe persistence.
///
/// Every method is a single round trip to the store. Implementations do
/// not retry; connection and query failures surface as
/// `RepositoryError::Storage`.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// List every recipe, newest (highest ID) first.
    async fn list(&self) -> Result<Vec<Recipe>, RepositoryError>;

    /// List recipes whose name contains `query`, ignoring case, newest first.
    ///
    /// An empty query matches every recipe.
    async fn search_by_name(&self, query: &str) -> Result<Vec<Recipe>, RepositoryError>;

    /// Get a recipe by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no recipe has that ID.
    async fn get_by_id(&self, id: i64) -> Result<Recipe, RepositoryError>;

    /// Insert a new recipe.
    ///
    /// Returns the persisted recipe with its store-assigned ID.
    async fn insert(&self, recipe: &NewRecipe) -> Result<Recipe, RepositoryError>;
}
