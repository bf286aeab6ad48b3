//! Ingredients, their taxonomy, and standalone catalog entries.

use serde::{Deserialize, Serialize};

use super::quantity::Quantity;
use super::technique::{ApplicationMethod, Technique};

/// Broad classification of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Fruit,
    Juice,
    Syrup,
    Puree,
    Tincture,
    Bitter,
    Liqueur,
    Spirit,
    Soda,
    Beer,
    Spice,
    Wine,
    Emulsifier,
    /// A placeholder standing in for a whole category ("any amaro").
    Category,
    Other,
}

impl IngredientKind {
    /// Human-readable name of the kind.
    pub fn label(&self) -> &'static str {
        match self {
            IngredientKind::Fruit => "fruit",
            IngredientKind::Juice => "juice",
            IngredientKind::Syrup => "syrup",
            IngredientKind::Puree => "puree",
            IngredientKind::Tincture => "tincture",
            IngredientKind::Bitter => "bitter",
            IngredientKind::Liqueur => "liqueur",
            IngredientKind::Spirit => "spirit",
            IngredientKind::Soda => "soda",
            IngredientKind::Beer => "beer",
            IngredientKind::Spice => "spice",
            IngredientKind::Wine => "wine",
            IngredientKind::Emulsifier => "emulsifier",
            IngredientKind::Category => "category",
            IngredientKind::Other => "other",
        }
    }
}

/// A taxonomy category an ingredient belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name ("amaro", "citrus").
    pub name: String,
    /// Kind shared by members of the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<IngredientKind>,
    /// Name of the parent category, for nested taxonomies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Category {
    /// Create a category with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            parent: None,
        }
    }

    /// Set the kind shared by the category's members.
    pub fn with_kind(mut self, kind: IngredientKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the parent category name.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// One measured ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name.
    pub name: String,
    /// Broad classification.
    pub kind: IngredientKind,
    /// Categories the ingredient belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    /// Measured amount.
    pub quantity: Quantity,
    /// Preparations applied to this ingredient.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub techniques: Vec<Technique>,
    /// When `kind` is `category`, the kind of the referenced category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_kind: Option<IngredientKind>,
}

impl Ingredient {
    /// Create an ingredient with no categories or techniques.
    pub fn new(name: impl Into<String>, kind: IngredientKind, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            kind,
            categories: Vec::new(),
            quantity,
            techniques: Vec::new(),
            category_kind: None,
        }
    }

    /// Set the ingredient's categories.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Set the ingredient's techniques.
    pub fn with_techniques(mut self, techniques: Vec<Technique>) -> Self {
        self.techniques = techniques;
        self
    }

    /// Set the kind of the referenced category, for placeholder lines.
    pub fn with_category_kind(mut self, kind: IngredientKind) -> Self {
        self.category_kind = Some(kind);
        self
    }

    /// The kind used when ordering a build: category placeholders order by
    /// the kind of the category they reference.
    pub fn ordering_kind(&self) -> IngredientKind {
        match self.kind {
            IngredientKind::Category => self.category_kind.unwrap_or(IngredientKind::Category),
            kind => kind,
        }
    }

    /// The application method, when any attached technique carries one.
    pub fn application_method(&self) -> Option<ApplicationMethod> {
        self.techniques.iter().find_map(Technique::application_method)
    }
}

/// A standalone catalog entry for an ingredient, with no bound quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    /// Display name.
    pub name: String,
    /// Broad classification.
    pub kind: IngredientKind,
    /// Categories the ingredient belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
}

impl IngredientEntry {
    /// Create an entry with no categories.
    pub fn new(name: impl Into<String>, kind: IngredientKind) -> Self {
        Self {
            name: name.into(),
            kind,
            categories: Vec::new(),
        }
    }

    /// Set the entry's categories.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::quantity::Unit;

    #[test]
    fn ordering_kind_resolves_category_placeholders() {
        let placeholder = Ingredient::new(
            "any amaro",
            IngredientKind::Category,
            Quantity::new(1.0, Unit::Oz),
        )
        .with_category_kind(IngredientKind::Liqueur);
        assert_eq!(placeholder.ordering_kind(), IngredientKind::Liqueur);

        let unresolved = Ingredient::new(
            "any amaro",
            IngredientKind::Category,
            Quantity::new(1.0, Unit::Oz),
        );
        assert_eq!(unresolved.ordering_kind(), IngredientKind::Category);

        let gin = Ingredient::new("gin", IngredientKind::Spirit, Quantity::new(2.0, Unit::Oz));
        assert_eq!(gin.ordering_kind(), IngredientKind::Spirit);
    }

    #[test]
    fn application_method_scans_techniques() {
        let chartreuse = Ingredient::new(
            "green chartreuse",
            IngredientKind::Liqueur,
            Quantity::new(0.25, Unit::Oz),
        )
        .with_techniques(vec![
            Technique::Temperature {
                state: crate::model::TemperatureState::Chilled,
            },
            Technique::Application {
                method: ApplicationMethod::Rinse,
            },
        ]);
        assert_eq!(
            chartreuse.application_method(),
            Some(ApplicationMethod::Rinse)
        );

        let gin = Ingredient::new("gin", IngredientKind::Spirit, Quantity::new(2.0, Unit::Oz));
        assert_eq!(gin.application_method(), None);
    }

    #[test]
    fn serde_defaults_for_optional_fields() {
        let json = r#"{
            "name": "lime juice",
            "kind": "juice",
            "quantity": { "amount": 0.75, "unit": "oz" }
        }"#;
        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert!(ingredient.categories.is_empty());
        assert!(ingredient.techniques.is_empty());
        assert_eq!(ingredient.category_kind, None);
    }
}
