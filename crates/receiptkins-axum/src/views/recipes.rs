//! Recipe pages.

use maud::{Markup, html};
use receiptkins_core::{Ingredient, Recipe, RecipeDetail};

use super::layout;

/// Home page: search box plus the full recipe grid.
pub fn index_page(recipes: &[Recipe]) -> Markup {
    layout(
        "Recipes",
        html! {
            h1 { "Recipes" }
            input id="search" type="search" name="q" placeholder="Search by name"
                autocomplete="off" data-target="recipe-grid";
            div id="recipe-grid" {
                (recipe_grid(recipes))
            }
        },
    )
}

/// Recipe grid. Rendered alone as the `/search` response.
pub fn recipe_grid(recipes: &[Recipe]) -> Markup {
    html! {
        @if recipes.is_empty() {
            p.empty { "No recipes found." }
        } @else {
            ul.recipe-grid {
                @for recipe in recipes {
                    li.recipe-card {
                        a href={ "/recipe/" (recipe.id) } { (recipe.name) }
                        @if !recipe.author.is_empty() {
                            span.author { "by " (recipe.author) }
                        }
                    }
                }
            }
        }
    }
}

/// Detail page with the parsed ingredient list.
pub fn recipe_page(detail: &RecipeDetail) -> Markup {
    let recipe = &detail.recipe;
    let steps: Vec<&str> = recipe
        .algorithm
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    layout(
        &recipe.name,
        html! {
            article.recipe {
                h1 { (recipe.name) }
                @if !recipe.author.is_empty() {
                    p.author { "by " (recipe.author) }
                }
                section {
                    h2 { "Ingredients" }
                    (ingredient_list(&detail.ingredients))
                }
                section {
                    h2 { "Preparation" }
                    @for step in &steps {
                        p { (step) }
                    }
                }
                a.back href="/" { "Back to recipes" }
            }
        },
    )
}

fn ingredient_list(ingredients: &[Ingredient]) -> Markup {
    html! {
        @if ingredients.is_empty() {
            p.empty { "No ingredients listed." }
        } @else {
            ul.ingredients {
                @for ingredient in ingredients {
                    li {
                        span.ingredient-name { (ingredient.name) }
                        @if !ingredient.quantity.is_empty() {
                            " "
                            span.quantity { (ingredient.quantity) }
                        }
                    }
                }
            }
        }
    }
}

/// Empty creation form. `app.js` submits it as JSON to `/api/receipts`.
pub fn create_page() -> Markup {
    layout(
        "New recipe",
        html! {
            h1 { "New recipe" }
            form id="create-recipe" action="/api/receipts" method="post" {
                label {
                    "Name"
                    input type="text" name="name" required;
                }
                label {
                    "Ingredients"
                    textarea name="ingredients" rows="4" placeholder="flour:200g|sugar:100g" {}
                }
                small { "Separate ingredients with | and name from quantity with :" }
                label {
                    "Preparation"
                    textarea name="algorithm" rows="8" {}
                }
                label {
                    "Author"
                    input type="text" name="author";
                }
                button type="submit" { "Save recipe" }
                p id="form-status" role="status" {}
            }
        },
    )
}
