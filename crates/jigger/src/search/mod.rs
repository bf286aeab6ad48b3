//! Fuzzy search and searchable-text derivation.

mod engine;
mod text;

pub use engine::{DEFAULT_SEARCH_LIMIT, fuzzy_search};
pub use text::{
    author_search_text, bar_search_text, category_search_text, ingredient_search_text,
    recipe_search_text,
};
