//! Searchable text derivation for catalog entities.
//!
//! Each entity flattens to one folded string so a query can hit a recipe
//! through an ingredient, a category, or a credited name. Absent optional
//! fields still contribute an empty segment; the doubled spaces that
//! produces are part of the derived text's stable shape.

use crate::model::{Author, Bar, Category, IngredientEntry, Recipe};
use crate::naming;

/// Searchable text for a recipe: its name, every ingredient name with its
/// category names, and every credited source.
pub fn recipe_search_text(recipe: &Recipe) -> String {
    let mut segments = vec![recipe.name.clone()];
    for ingredient in &recipe.ingredients {
        segments.push(ingredient.name.clone());
        for category in &ingredient.categories {
            segments.push(category.name.clone());
        }
    }
    for attribution in &recipe.attributions {
        segments.push(attribution.source.clone());
    }
    naming::fold(&segments.join(" "))
}

/// Searchable text for a bar: name and location.
pub fn bar_search_text(bar: &Bar) -> String {
    let segments = [bar.name.clone(), bar.location.clone().unwrap_or_default()];
    naming::fold(&segments.join(" "))
}

/// Searchable text for an author: just the name.
pub fn author_search_text(author: &Author) -> String {
    naming::fold(&author.name)
}

/// Searchable text for a standalone ingredient entry: name, kind, and each
/// category's name and parent.
pub fn ingredient_search_text(entry: &IngredientEntry) -> String {
    let mut segments = vec![entry.name.clone(), entry.kind.label().to_string()];
    for category in &entry.categories {
        segments.push(category.name.clone());
        segments.push(category.parent.clone().unwrap_or_default());
    }
    naming::fold(&segments.join(" "))
}

/// Searchable text for a category: name, kind, and parent.
pub fn category_search_text(category: &Category) -> String {
    let segments = [
        category.name.clone(),
        category
            .kind
            .map(|kind| kind.label().to_string())
            .unwrap_or_default(),
        category.parent.clone().unwrap_or_default(),
    ];
    naming::fold(&segments.join(" "))
}
