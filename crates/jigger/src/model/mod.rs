//! Plain data records for catalog content.

mod attribution;
mod ingredient;
mod quantity;
mod recipe;
mod technique;

pub use attribution::{Attribution, AttributionRelation, Source, SourceKind};
pub use ingredient::{Category, Ingredient, IngredientEntry, IngredientKind};
pub use quantity::{Quantity, Unit, UnitClass};
pub use recipe::{Author, Bar, Recipe};
pub use technique::{ApplicationMethod, Technique, TemperatureState};
