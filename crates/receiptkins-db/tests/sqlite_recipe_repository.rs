//! Integration tests for the `SQLite` recipe repository.
//!
//! Exercises `SqliteRecipeRepository` through the `RecipeRepository` trait
//! against a file-backed database, the way the server uses it.

use std::sync::Arc;

use receiptkins_core::{NewRecipe, RecipeRepository, RecipeService};
use receiptkins_db::{RepoFactory, SqliteRecipeRepository, setup_database};
use tempfile::TempDir;

async fn file_backed_repo() -> (TempDir, Arc<dyn RecipeRepository>) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("recipes.db").display());
    let pool = setup_database(&url).await.unwrap();
    (dir, Arc::new(SqliteRecipeRepository::new(pool)))
}

fn recipe(name: &str, ingredients: &str) -> NewRecipe {
    NewRecipe {
        name: name.to_string(),
        ingredients: ingredients.to_string(),
        algorithm: "Combine everything.".to_string(),
        author: "Integration".to_string(),
    }
}

/// Listing after N inserts returns exactly N recipes, newest first.
#[tokio::test]
async fn test_list_after_n_inserts() {
    let (_dir, repo) = file_backed_repo().await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let created = repo
            .insert(&recipe(&format!("Recipe {i}"), "salt:1g"))
            .await
            .unwrap();
        ids.push(created.id);
    }

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 5);

    ids.reverse();
    let listed_ids: Vec<i64> = listed.iter().map(|r| r.id).collect();
    assert_eq!(listed_ids, ids);
}

/// Names are not unique; duplicates get distinct IDs.
#[tokio::test]
async fn test_duplicate_names_get_distinct_ids() {
    let (_dir, repo) = file_backed_repo().await;

    let a = repo.insert(&recipe("Omelette", "eggs:3")).await.unwrap();
    let b = repo.insert(&recipe("Omelette", "eggs:2")).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(repo.search_by_name("omelette").await.unwrap().len(), 2);
}

/// Malformed ingredient strings are stored verbatim; parsing drops them on read.
#[tokio::test]
async fn test_malformed_ingredients_are_stored_and_dropped_on_detail() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("recipes.db").display());
    let service: RecipeService = RepoFactory::recipe_service(setup_database(&url).await.unwrap());

    let created = service
        .create(recipe("Stew", "beef:1kg|time:2:30|| carrots : 3 |garnish"))
        .await
        .unwrap();

    let stored = service.get(created.id).await.unwrap();
    assert_eq!(stored.ingredients, "beef:1kg|time:2:30|| carrots : 3 |garnish");

    let detail = service.detail(created.id).await.unwrap();
    let pairs: Vec<(&str, &str)> = detail
        .ingredients
        .iter()
        .map(|i| (i.name.as_str(), i.quantity.as_str()))
        .collect();
    assert_eq!(pairs, [("beef", "1kg"), ("carrots", "3")]);
}

/// Data survives closing and reopening the database.
#[tokio::test]
async fn test_recipes_persist_across_pools() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("recipes.db").display());

    let pool = setup_database(&url).await.unwrap();
    let created = SqliteRecipeRepository::new(pool.clone())
        .insert(&recipe("Porridge", "oats:50g|milk:200ml"))
        .await
        .unwrap();
    pool.close().await;

    let reopened = SqliteRecipeRepository::new(setup_database(&url).await.unwrap());
    assert_eq!(reopened.get_by_id(created.id).await.unwrap(), created);
}
