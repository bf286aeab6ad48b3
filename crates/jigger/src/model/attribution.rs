//! Recipe credits and publication sources.

use serde::{Deserialize, Serialize};

/// The relationship between a recipe and a credited name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributionRelation {
    /// The person who created the recipe.
    #[serde(rename = "recipe author")]
    RecipeAuthor,
    /// The person who adapted an earlier recipe.
    #[serde(rename = "adapted by")]
    AdaptedBy,
    /// The bar that serves or originated the recipe.
    #[serde(rename = "bar")]
    Bar,
    /// The book the recipe was published in.
    #[serde(rename = "book")]
    Book,
}

impl AttributionRelation {
    /// Human-readable name of the relation.
    pub fn label(&self) -> &'static str {
        match self {
            AttributionRelation::RecipeAuthor => "recipe author",
            AttributionRelation::AdaptedBy => "adapted by",
            AttributionRelation::Bar => "bar",
            AttributionRelation::Book => "book",
        }
    }
}

/// A single credit attached to a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    /// How the credited name relates to the recipe.
    pub relation: AttributionRelation,
    /// The credited name: a person, bar, or book.
    pub source: String,
    /// City or venue, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Link to the source, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Attribution {
    /// Create an attribution with no location or URL.
    pub fn new(relation: AttributionRelation, source: impl Into<String>) -> Self {
        Self {
            relation,
            source: source.into(),
            location: None,
            url: None,
        }
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// What kind of place a recipe was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Book,
    Bar,
    Website,
}

/// Where a recipe was collected from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Name of the book, bar, or website.
    pub name: String,
    /// What kind of place the name refers to.
    pub kind: SourceKind,
}

impl Source {
    /// Create a source.
    pub fn new(name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
