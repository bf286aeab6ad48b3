//! Recipes and the people and places behind them.

use serde::{Deserialize, Serialize};

use super::attribution::{Attribution, Source, SourceKind};
use super::ingredient::Ingredient;

fn default_servings() -> u32 {
    1
}

/// A complete recipe as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name, articles included ("The Last Word").
    pub name: String,
    /// Servings the ingredient quantities are written for.
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// Measured ingredient lines, in authoring order.
    pub ingredients: Vec<Ingredient>,
    /// Credits, in authoring order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributions: Vec<Attribution>,
    /// Where the recipe was collected from.
    pub source: Source,
    /// Build instructions, one step per entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    /// Glass the drink is served in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glassware: Option<String>,
}

impl Recipe {
    /// The book this recipe was published in, when its source is a book.
    pub fn book_name(&self) -> Option<&str> {
        match self.source.kind {
            SourceKind::Book => Some(self.source.name.as_str()),
            _ => None,
        }
    }
}

/// A bar the catalog tracks recipes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Display name.
    pub name: String,
    /// City, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Bar {
    /// Create a bar with no location.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    /// Set the bar's city.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A recipe author the catalog tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,
}

impl Author {
    /// Create an author.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngredientKind, Quantity, Unit};

    fn last_word() -> Recipe {
        Recipe {
            name: "The Last Word".to_string(),
            servings: 1,
            ingredients: vec![Ingredient::new(
                "gin",
                IngredientKind::Spirit,
                Quantity::new(0.75, Unit::Oz),
            )],
            attributions: Vec::new(),
            source: Source::new("The Savoy Cocktail Book", SourceKind::Book),
            instructions: Vec::new(),
            glassware: Some("coupe".to_string()),
        }
    }

    #[test]
    fn book_name_requires_book_source() {
        let mut recipe = last_word();
        assert_eq!(recipe.book_name(), Some("The Savoy Cocktail Book"));

        recipe.source = Source::new("Attaboy", SourceKind::Bar);
        assert_eq!(recipe.book_name(), None);
    }

    #[test]
    fn servings_default_to_one() {
        let json = r#"{
            "name": "Daiquiri",
            "ingredients": [],
            "source": { "name": "example.com", "kind": "website" }
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.servings, 1);
        assert!(recipe.attributions.is_empty());
        assert!(recipe.instructions.is_empty());
        assert_eq!(recipe.glassware, None);
    }
}
