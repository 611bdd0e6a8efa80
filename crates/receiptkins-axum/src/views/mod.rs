//! HTML views rendered with maud.
//!
//! All interpolated values are escaped by maud.

mod layout;
mod recipes;

pub use layout::layout;
pub use recipes::{create_page, index_page, recipe_grid, recipe_page};
