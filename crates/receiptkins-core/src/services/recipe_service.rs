//! Recipe service - thin orchestrator for recipe operations.
//!
//! Delegates persistence to the `RecipeRepository` port and pairs detail
//! lookups with the ingredient parser.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{NewRecipe, Recipe, RecipeDetail, parse_ingredients_with_report};
use crate::ports::{RecipeRepository, RepositoryError};

/// Service for browsing and creating recipes.
///
/// Holds the repository as a trait object so adapters and tests can inject
/// any store.
pub struct RecipeService {
    repo: Arc<dyn RecipeRepository>,
}

impl RecipeService {
    /// Create a new recipe service.
    pub fn new(repo: Arc<dyn RecipeRepository>) -> Self {
        Self { repo }
    }

    /// List all recipes, newest first.
    pub async fn list(&self) -> Result<Vec<Recipe>, RepositoryError> {
        self.repo.list().await
    }

    /// Search recipes by name substring, newest first.
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, RepositoryError> {
        self.repo.search_by_name(query).await
    }

    /// Get a single recipe by ID.
    pub async fn get(&self, id: i64) -> Result<Recipe, RepositoryError> {
        self.repo.get_by_id(id).await
    }

    /// Get a recipe with its ingredient string parsed.
    ///
    /// Malformed ingredient segments are left out of the result and logged
    /// at debug level.
    pub async fn detail(&self, id: i64) -> Result<RecipeDetail, RepositoryError> {
        let recipe = self.repo.get_by_id(id).await?;
        let parsed = parse_ingredients_with_report(&recipe.ingredients);

        if !parsed.is_clean() {
            for dropped in &parsed.dropped {
                debug!(
                    recipe_id = recipe.id,
                    segment_index = dropped.index,
                    parts = dropped.parts,
                    segment = %dropped.segment,
                    "Dropped malformed ingredient segment"
                );
            }
        }

        Ok(RecipeDetail {
            recipe,
            ingredients: parsed.ingredients,
        })
    }

    /// Store a new recipe and return it with its assigned ID.
    pub async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RepositoryError> {
        let created = self.repo.insert(&recipe).await?;
        info!(recipe_id = created.id, name = %created.name, "Recipe created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ingredient;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Vec-backed repository for exercising the service without a database.
    #[derive(Default)]
    struct InMemoryRepo {
        rows: Mutex<Vec<Recipe>>,
        fail: bool,
    }

    impl InMemoryRepo {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.fail {
                Err(RepositoryError::Storage("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl RecipeRepository for InMemoryRepo {
        async fn list(&self) -> Result<Vec<Recipe>, RepositoryError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap().clone();
            rows.sort_by(|a, b| b.id.cmp(&a.id));
            Ok(rows)
        }

        async fn search_by_name(&self, query: &str) -> Result<Vec<Recipe>, RepositoryError> {
            Ok(self
                .list()
                .await?
                .into_iter()
                .filter(|r| r.matches_name(query))
                .collect())
        }

        async fn get_by_id(&self, id: i64) -> Result<Recipe, RepositoryError> {
            self.check()?;
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(format!("Recipe with ID {id}")))
        }

        async fn insert(&self, recipe: &NewRecipe) -> Result<Recipe, RepositoryError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let id = i64::try_from(rows.len()).unwrap() + 1;
            let created = recipe.clone().with_id(id);
            rows.push(created.clone());
            Ok(created)
        }
    }

    fn new_recipe(name: &str, ingredients: &str) -> NewRecipe {
        NewRecipe {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            algorithm: "Mix and bake.".to_string(),
            author: "Test".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let service = RecipeService::new(Arc::new(InMemoryRepo::default()));

        let created = service
            .create(new_recipe("Bread", "flour:500g"))
            .await
            .unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert!(fetched.id > 0);
    }

    #[tokio::test]
    async fn detail_parses_ingredients_and_drops_malformed() {
        let service = RecipeService::new(Arc::new(InMemoryRepo::default()));
        let created = service
            .create(new_recipe("Cake", "flour:200g|oops|sugar:100g"))
            .await
            .unwrap();

        let detail = service.detail(created.id).await.unwrap();

        assert_eq!(detail.recipe, created);
        assert_eq!(
            detail.ingredients,
            vec![
                Ingredient {
                    name: "flour".to_string(),
                    quantity: "200g".to_string(),
                },
                Ingredient {
                    name: "sugar".to_string(),
                    quantity: "100g".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn detail_of_missing_recipe_is_not_found() {
        let service = RecipeService::new(Arc::new(InMemoryRepo::default()));

        let err = service.detail(42).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn storage_failures_propagate_unchanged() {
        let service = RecipeService::new(Arc::new(InMemoryRepo::failing()));

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(msg) if msg == "connection refused"));
    }
}
