//! Recipe JSON API.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use receiptkins_core::{NewRecipe, Recipe};

use crate::error::HttpError;
use crate::state::AppState;

/// Create a recipe from a JSON body.
///
/// Any body that fails to decode (bad syntax, wrong field types, missing
/// `name`, wrong content type) is a 400 and nothing is stored.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewRecipe>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), HttpError> {
    let Json(new_recipe) = payload?;
    let created = state.recipes.create(new_recipe).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
