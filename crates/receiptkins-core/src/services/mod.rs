//! Application services.
//!
//! Services orchestrate ports and domain logic. Adapters (the axum web
//! server) call services and never touch repositories directly.

mod recipe_service;

pub use recipe_service::RecipeService;
