//! Serving-count scaling for recipe quantities.

use serde::{Deserialize, Serialize};

use super::convert::optimal_unit;
use crate::model::{Quantity, Unit};

/// A quantity scaled for a target serving count. The recipe's original
/// measure rides along so displays can show both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledQuantity {
    /// Scaled amount, in `unit`s.
    pub amount: f64,
    /// Unit after re-fitting the scaled amount.
    pub unit: Unit,
    /// Amount as written in the recipe.
    pub original_amount: f64,
    /// Unit as written in the recipe.
    pub original_unit: Unit,
}

impl ScaledQuantity {
    /// The scaled measure as a plain quantity.
    pub fn quantity(&self) -> Quantity {
        Quantity::new(self.amount, self.unit)
    }

    /// The measure as written in the recipe.
    pub fn original(&self) -> Quantity {
        Quantity::new(self.original_amount, self.original_unit)
    }
}

/// Scale a quantity by a factor and re-fit the unit, so 2 tbsp doubled
/// reads as 2 oz rather than 4 tbsp.
///
/// A non-finite or non-positive factor scales by 1 instead; a bad serving
/// count never corrupts a rendered amount.
pub fn scale_quantity(quantity: Quantity, factor: f64) -> ScaledQuantity {
    let factor = if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    };
    let scaled = optimal_unit(quantity.amount * factor, quantity.unit);
    ScaledQuantity {
        amount: scaled.amount,
        unit: scaled.unit,
        original_amount: quantity.amount,
        original_unit: quantity.unit,
    }
}

/// The multiplier that takes a recipe from its written servings to a
/// target count. Zero, negative, or non-finite inputs yield 1.0.
pub fn scale_factor(default_servings: f64, target_servings: f64) -> f64 {
    if !default_servings.is_finite()
        || !target_servings.is_finite()
        || default_servings <= 0.0
        || target_servings <= 0.0
    {
        return 1.0;
    }
    target_servings / default_servings
}
