//! Attribution resolution: the single credit line shown under a recipe.

use crate::model::{Attribution, AttributionRelation, Recipe};

/// Names suppressed while resolving a credit line, compared
/// case-insensitively. A bar's own page excludes the bar name, an author's
/// page excludes the author, and so on; the resolver then credits the next
/// most specific name instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributionExclusions {
    /// Bar name to suppress.
    pub bar: Option<String>,
    /// Author or adapter name to suppress.
    pub author: Option<String>,
    /// Book name to suppress.
    pub book: Option<String>,
    /// Source name to suppress in the final fallback.
    pub source: Option<String>,
}

impl AttributionExclusions {
    /// No exclusions: resolve the most specific credit available.
    pub fn none() -> Self {
        Self::default()
    }

    /// Suppress a bar name.
    pub fn with_bar(mut self, name: impl Into<String>) -> Self {
        self.bar = Some(name.into());
        self
    }

    /// Suppress an author or adapter name.
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(name.into());
        self
    }

    /// Suppress a book name.
    pub fn with_book(mut self, name: impl Into<String>) -> Self {
        self.book = Some(name.into());
        self
    }

    /// Suppress a source name in the final fallback.
    pub fn with_source(mut self, name: impl Into<String>) -> Self {
        self.source = Some(name.into());
        self
    }
}

fn excluded(name: &str, exclusion: &Option<String>) -> bool {
    exclusion
        .as_deref()
        .is_some_and(|excluded| excluded.to_lowercase() == name.to_lowercase())
}

/// Resolution priority. People outrank publications, publications outrank
/// venues.
fn relation_priority(relation: AttributionRelation) -> u8 {
    match relation {
        AttributionRelation::AdaptedBy => 0,
        AttributionRelation::RecipeAuthor => 1,
        AttributionRelation::Book => 2,
        AttributionRelation::Bar => 3,
    }
}

/// The credit an attribution contributes, given the recipe's book (when its
/// source is one) and the active exclusions.
fn credit_for(
    attribution: &Attribution,
    book: Option<&str>,
    exclusions: &AttributionExclusions,
) -> Option<String> {
    match attribution.relation {
        AttributionRelation::AdaptedBy | AttributionRelation::RecipeAuthor => {
            if excluded(&attribution.source, &exclusions.author) {
                book.map(str::to_string)
            } else {
                Some(match book {
                    Some(book) => format!("{} | {}", attribution.source, book),
                    None => attribution.source.clone(),
                })
            }
        }
        AttributionRelation::Book => {
            if excluded(&attribution.source, &exclusions.book) {
                None
            } else {
                Some(attribution.source.clone())
            }
        }
        AttributionRelation::Bar => {
            if excluded(&attribution.source, &exclusions.bar) {
                book.map(str::to_string)
            } else {
                match book {
                    Some(book) => Some(book.to_string()),
                    None => Some(format!("served at {}", attribution.source)),
                }
            }
        }
    }
}

/// The single best credit line for a recipe, or `None` when every candidate
/// is excluded.
///
/// Attributions are tried most-specific first (`adapted by`, then
/// `recipe author`, `book`, `bar`); the first that contributes a non-empty
/// credit wins. A recipe with no usable attribution falls back to its
/// source name.
pub fn resolve_attribution(
    recipe: &Recipe,
    exclusions: &AttributionExclusions,
) -> Option<String> {
    let book = recipe.book_name();

    let mut candidates: Vec<&Attribution> = recipe.attributions.iter().collect();
    candidates.sort_by_key(|attribution| relation_priority(attribution.relation));

    for attribution in candidates {
        if let Some(credit) = credit_for(attribution, book, exclusions) {
            if !credit.is_empty() {
                return Some(credit);
            }
        }
    }

    if excluded(&recipe.source.name, &exclusions.source) {
        None
    } else {
        Some(recipe.source.name.clone())
    }
}
