//! The loaded content catalog: an immutable snapshot with derived search
//! indexes.
//!
//! A [`Catalog`] is built once per content load. Search haystacks and the
//! recipe name counts are precomputed at construction, so lookups and
//! searches never re-derive text.

mod loader;

pub use loader::CatalogFile;

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attribution::{AttributionExclusions, resolve_attribution};
use crate::model::{Author, Bar, IngredientEntry, Recipe};
use crate::naming;
use crate::search;

/// Collection counts for a loaded catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub recipes: usize,
    pub ingredients: usize,
    pub bars: usize,
    pub authors: usize,
}

/// An immutable snapshot of the catalog's content.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    ingredients: Vec<IngredientEntry>,
    bars: Vec<Bar>,
    authors: Vec<Author>,
    recipe_text: Vec<String>,
    ingredient_text: Vec<String>,
    bar_text: Vec<String>,
    author_text: Vec<String>,
    // Folded name -> number of recipes carrying it.
    name_counts: HashMap<String, usize>,
}

impl Catalog {
    /// Build a snapshot from loaded collections, deriving the search
    /// haystacks and name counts up front.
    pub fn new(
        recipes: Vec<Recipe>,
        ingredients: Vec<IngredientEntry>,
        bars: Vec<Bar>,
        authors: Vec<Author>,
    ) -> Self {
        let recipe_text = recipes.iter().map(search::recipe_search_text).collect();
        let ingredient_text = ingredients
            .iter()
            .map(search::ingredient_search_text)
            .collect();
        let bar_text = bars.iter().map(search::bar_search_text).collect();
        let author_text = authors.iter().map(search::author_search_text).collect();

        let mut name_counts: HashMap<String, usize> = HashMap::new();
        for recipe in &recipes {
            *name_counts.entry(naming::fold(&recipe.name)).or_insert(0) += 1;
        }

        Self {
            recipes,
            ingredients,
            bars,
            authors,
            recipe_text,
            ingredient_text,
            bar_text,
            author_text,
            name_counts,
        }
    }

    /// All recipes, in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// All standalone ingredient entries, in catalog order.
    pub fn ingredients(&self) -> &[IngredientEntry] {
        &self.ingredients
    }

    /// All bars, in catalog order.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// All authors, in catalog order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Collection counts.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            recipes: self.recipes.len(),
            ingredients: self.ingredients.len(),
            bars: self.bars.len(),
            authors: self.authors.len(),
        }
    }

    /// Fuzzy-search recipes, best match first.
    pub fn search_recipes(&self, query: &str, limit: usize) -> Vec<&Recipe> {
        search::fuzzy_search(&self.recipes, &self.recipe_text, query, limit)
    }

    /// Fuzzy-search ingredient entries, best match first.
    pub fn search_ingredients(&self, query: &str, limit: usize) -> Vec<&IngredientEntry> {
        search::fuzzy_search(&self.ingredients, &self.ingredient_text, query, limit)
    }

    /// Fuzzy-search bars, best match first.
    pub fn search_bars(&self, query: &str, limit: usize) -> Vec<&Bar> {
        search::fuzzy_search(&self.bars, &self.bar_text, query, limit)
    }

    /// Fuzzy-search authors, best match first.
    pub fn search_authors(&self, query: &str, limit: usize) -> Vec<&Author> {
        search::fuzzy_search(&self.authors, &self.author_text, query, limit)
    }

    /// Recipes grouped under their index letters, `#` first.
    pub fn recipe_groups(&self) -> IndexMap<char, Vec<&Recipe>> {
        naming::letter_groups(&self.recipes, |recipe| recipe.name.as_str())
    }

    /// Ingredient entries grouped under their index letters, `#` first.
    pub fn ingredient_groups(&self) -> IndexMap<char, Vec<&IngredientEntry>> {
        naming::letter_groups(&self.ingredients, |entry| entry.name.as_str())
    }

    /// Case-insensitive, accent-insensitive exact recipe lookup. The first
    /// match in catalog order wins when names collide.
    pub fn recipe_named(&self, name: &str) -> Option<&Recipe> {
        let needle = naming::fold(name);
        self.recipes
            .iter()
            .find(|recipe| naming::fold(&recipe.name) == needle)
    }

    /// Whether more than one recipe carries this name.
    pub fn is_ambiguous(&self, name: &str) -> bool {
        self.name_counts
            .get(&naming::fold(name))
            .copied()
            .unwrap_or(0)
            > 1
    }

    /// Display name for a recipe: the bare name when unique, otherwise the
    /// name disambiguated with its resolved credit in parentheses.
    pub fn display_name(&self, recipe: &Recipe) -> String {
        if !self.is_ambiguous(&recipe.name) {
            return recipe.name.clone();
        }
        match resolve_attribution(recipe, &AttributionExclusions::none()) {
            Some(credit) => format!("{} ({})", recipe.name, credit),
            None => recipe.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Attribution, AttributionRelation, Ingredient, IngredientKind, Quantity, Source,
        SourceKind, Unit,
    };

    fn recipe(name: &str, source: Source, attributions: Vec<Attribution>) -> Recipe {
        Recipe {
            name: name.to_string(),
            servings: 1,
            ingredients: vec![Ingredient::new(
                "gin",
                IngredientKind::Spirit,
                Quantity::new(2.0, Unit::Oz),
            )],
            attributions,
            source,
            instructions: Vec::new(),
            glassware: None,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                recipe(
                    "Daiquiri",
                    Source::new("example.com", SourceKind::Website),
                    Vec::new(),
                ),
                recipe(
                    "daiquiri",
                    Source::new("Smuggler's Cove", SourceKind::Book),
                    vec![Attribution::new(
                        AttributionRelation::RecipeAuthor,
                        "Martin Cate",
                    )],
                ),
                recipe(
                    "The Last Word",
                    Source::new("The Savoy Cocktail Book", SourceKind::Book),
                    Vec::new(),
                ),
            ],
            vec![IngredientEntry::new("Gin", IngredientKind::Spirit)],
            vec![Bar::new("Attaboy").with_location("New York")],
            vec![Author::new("Sam Ross")],
        )
    }

    #[test]
    fn stats_count_collections() {
        let catalog = sample_catalog();
        let stats = catalog.stats();
        assert_eq!(stats.recipes, 3);
        assert_eq!(stats.ingredients, 1);
        assert_eq!(stats.bars, 1);
        assert_eq!(stats.authors, 1);
    }

    #[test]
    fn recipe_lookup_ignores_case_and_accents() {
        let catalog = sample_catalog();
        let hit = catalog.recipe_named("the last word").unwrap();
        assert_eq!(hit.name, "The Last Word");

        // Collision: the first catalog entry wins.
        let hit = catalog.recipe_named("DAIQUIRI").unwrap();
        assert_eq!(hit.source.name, "example.com");

        assert!(catalog.recipe_named("Jungle Bird").is_none());
    }

    #[test]
    fn display_name_disambiguates_duplicates() {
        let catalog = sample_catalog();

        let unique = catalog.recipe_named("The Last Word").unwrap();
        assert_eq!(catalog.display_name(unique), "The Last Word");

        let credited = &catalog.recipes()[1];
        assert_eq!(
            catalog.display_name(credited),
            "daiquiri (Martin Cate | Smuggler's Cove)"
        );

        // Duplicate without attributions still shows its source credit.
        let uncredited = &catalog.recipes()[0];
        assert_eq!(catalog.display_name(uncredited), "Daiquiri (example.com)");
    }

    #[test]
    fn groups_and_search_come_from_the_snapshot() {
        let catalog = sample_catalog();

        let groups = catalog.recipe_groups();
        let headers: Vec<char> = groups.keys().copied().collect();
        assert_eq!(headers, vec!['D', 'L']);
        assert_eq!(groups[&'D'].len(), 2);

        let hits = catalog.search_recipes("last word", 10);
        assert_eq!(hits[0].name, "The Last Word");

        let bars = catalog.search_bars("attaboy", 10);
        assert_eq!(bars.len(), 1);
    }
}
