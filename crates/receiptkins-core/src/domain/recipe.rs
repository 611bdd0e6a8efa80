//! Recipe domain types.

use serde::{Deserialize, Serialize};

use super::ingredients::Ingredient;

/// A recipe that exists in the store with a database ID.
///
/// Use `NewRecipe` for recipes that haven't been persisted yet.
/// Serializes to the public JSON shape
/// `{"id", "name", "ingredients", "algorithm", "author"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned ID. Never reused or changed after insert.
    pub id: i64,
    /// Human-readable title. Not unique.
    pub name: String,
    /// Raw ingredient string, `name:quantity` pairs separated by `|`.
    pub ingredients: String,
    /// Preparation instructions.
    pub algorithm: String,
    /// Free-form attribution.
    pub author: String,
}

impl Recipe {
    /// True if the name contains `query`, ignoring case.
    ///
    /// Case folding is Unicode-aware. An empty query matches every recipe.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// A recipe to be inserted (no ID yet).
///
/// Decoded from the create endpoint's JSON body. `name` is required;
/// the remaining fields default to empty strings. An `id` field in the
/// body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub author: String,
}

impl NewRecipe {
    /// Attach the store-assigned ID, producing the persisted form.
    #[must_use]
    pub fn with_id(self, id: i64) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            algorithm: self.algorithm,
            author: self.author,
        }
    }
}

/// A recipe together with its parsed ingredient list, as shown on the
/// detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
}
