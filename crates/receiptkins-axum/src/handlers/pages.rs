//! HTML page handlers.

use axum::extract::{Path, Query, State};
use axum::response::Html;

use crate::error::HttpError;
use crate::state::AppState;
use crate::views;

/// Home page listing all recipes.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let recipes = state.recipes.list().await?;
    Ok(Html(views::index_page(&recipes).into_string()))
}

/// Recipe grid fragment for a name search.
///
/// A missing `q` matches everything. When `q` is repeated the first value
/// wins and the rest are ignored.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, HttpError> {
    let query = first_value(&params, "q").unwrap_or_default();
    let recipes = state.recipes.search(query).await?;
    Ok(Html(views::recipe_grid(&recipes).into_string()))
}

fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Recipe detail page.
///
/// The ID is taken as a string so a non-numeric value is reported as
/// `400 Invalid ID` in the same JSON shape as every other error.
pub async fn recipe(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, HttpError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| HttpError::BadRequest("Invalid ID".to_string()))?;

    let detail = state.recipes.detail(id).await?;
    Ok(Html(views::recipe_page(&detail).into_string()))
}

/// Empty recipe creation form.
pub async fn create_form() -> Html<String> {
    Html(views::create_page().into_string())
}
