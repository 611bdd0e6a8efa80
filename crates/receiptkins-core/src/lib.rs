#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{
    DATABASE_URL_ENV, DEFAULT_DATABASE_URL, DatabaseUrlResolution, DatabaseUrlSource,
    resolve_database_url,
};
pub use domain::{
    DroppedSegment, Ingredient, IngredientList, NewRecipe, Recipe, RecipeDetail,
    parse_ingredients, parse_ingredients_with_report,
};
pub use ports::{RecipeRepository, RepositoryError};
pub use services::RecipeService;
