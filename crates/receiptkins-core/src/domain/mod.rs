//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, templates).
//!
//! # Structure
//!
//! - `recipe` - Recipe types (`Recipe`, `NewRecipe`, `RecipeDetail`)
//! - `ingredients` - Ingredient string parsing

pub mod ingredients;
mod recipe;

pub use ingredients::{
    DroppedSegment, Ingredient, IngredientList, parse_ingredients, parse_ingredients_with_report,
};
pub use recipe::{NewRecipe, Recipe, RecipeDetail};
