//! HTTP request handlers.
//!
//! Handlers are thin wrappers that delegate to `RecipeService` and render
//! either a maud view or JSON.

pub mod pages;
pub mod recipes;
