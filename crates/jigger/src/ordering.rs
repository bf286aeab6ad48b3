//! Canonical build order for a recipe's ingredient list.
//!
//! Encodes the bartending convention of building cheapest-first as a total
//! order, so every rendering of a recipe lists ingredients the same way.

use std::cmp::Ordering;

use crate::measure::to_ml;
use crate::model::{ApplicationMethod, Ingredient, IngredientKind, Unit};

/// Application techniques bracket the build: rinses prepare the glass
/// before anything pours, floats and toppers go on last.
fn application_priority(method: Option<ApplicationMethod>) -> i8 {
    match method {
        Some(ApplicationMethod::Rinse) => -1,
        None => 0,
        Some(ApplicationMethod::Float) => 1,
        Some(ApplicationMethod::Top) => 2,
    }
}

/// Tier of a unit within an application bracket. Smaller pours come first.
fn unit_priority(unit: Unit) -> u8 {
    match unit {
        Unit::Spray | Unit::Each => 0,
        Unit::Drop => 1,
        Unit::Dash => 2,
        Unit::Gram => 3,
        Unit::Ml | Unit::Tsp | Unit::Tbsp | Unit::Oz | Unit::Cup => 4,
        Unit::Pinch | Unit::Bottle | Unit::Part => 5,
    }
}

/// Tier of an ingredient kind within a unit tier.
fn kind_priority(kind: IngredientKind) -> u8 {
    match kind {
        IngredientKind::Fruit => 0,
        IngredientKind::Juice
        | IngredientKind::Syrup
        | IngredientKind::Puree
        | IngredientKind::Other => 1,
        IngredientKind::Tincture | IngredientKind::Bitter => 2,
        IngredientKind::Liqueur | IngredientKind::Spirit | IngredientKind::Category => 3,
        IngredientKind::Soda | IngredientKind::Beer | IngredientKind::Spice
        | IngredientKind::Wine => 4,
        IngredientKind::Emulsifier => 5,
    }
}

/// Compare two ingredient lines for build order.
///
/// Criteria apply in sequence, stopping at the first difference:
/// application technique, unit tier, ingredient kind, then the
/// milliliter-converted amount. `total_cmp` on the final criterion keeps
/// the order total even for pathological amounts.
pub fn compare_ingredients(a: &Ingredient, b: &Ingredient) -> Ordering {
    application_priority(a.application_method())
        .cmp(&application_priority(b.application_method()))
        .then_with(|| unit_priority(a.quantity.unit).cmp(&unit_priority(b.quantity.unit)))
        .then_with(|| kind_priority(a.ordering_kind()).cmp(&kind_priority(b.ordering_kind())))
        .then_with(|| {
            to_ml(a.quantity)
                .amount
                .total_cmp(&to_ml(b.quantity).amount)
        })
}

/// A recipe's ingredients in canonical build order. The sort is stable, so
/// lines the comparator cannot distinguish keep their authoring order.
pub fn build_order(ingredients: &[Ingredient]) -> Vec<&Ingredient> {
    let mut ordered: Vec<&Ingredient> = ingredients.iter().collect();
    ordered.sort_by(|a, b| compare_ingredients(a, b));
    ordered
}
