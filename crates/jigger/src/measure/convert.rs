//! Unit conversion along the imperial volume chain, plus metric crossover.

use crate::model::{Quantity, Unit};

/// Milliliters per teaspoon.
pub const ML_PER_TSP: f64 = 5.0;
/// Milliliters per tablespoon.
pub const ML_PER_TBSP: f64 = 15.0;
/// Milliliters per fluid ounce.
pub const ML_PER_OZ: f64 = 30.0;
/// Milliliters per cup.
pub const ML_PER_CUP: f64 = 240.0;

/// Teaspoons in a tablespoon.
const TSP_PER_TBSP: f64 = 3.0;
/// Tablespoons in an ounce.
const TBSP_PER_OZ: f64 = 2.0;
/// Ounce count at which a measure promotes to cups, and the divisor used.
const OZ_PER_CUP: f64 = 16.0;

/// Milliliters in one of `unit`, for the units that cross over to metric.
fn ml_per(unit: Unit) -> Option<f64> {
    match unit {
        Unit::Tsp => Some(ML_PER_TSP),
        Unit::Tbsp => Some(ML_PER_TBSP),
        Unit::Oz => Some(ML_PER_OZ),
        Unit::Cup => Some(ML_PER_CUP),
        _ => None,
    }
}

/// Round to two decimal places, ties away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert an imperial volume quantity to milliliters.
///
/// Quantities in any other class pass through unchanged; asking for a
/// conversion that does not apply is not an error.
pub fn to_ml(quantity: Quantity) -> Quantity {
    match ml_per(quantity.unit) {
        Some(factor) => Quantity::new(quantity.amount * factor, Unit::Ml),
        None => quantity,
    }
}

/// Convert a milliliter quantity to fluid ounces; anything else passes
/// through unchanged.
pub fn to_oz(quantity: Quantity) -> Quantity {
    match quantity.unit {
        Unit::Ml => Quantity::new(quantity.amount / ML_PER_OZ, Unit::Oz),
        _ => quantity,
    }
}

/// Promote an amount to the largest unit in the tsp/tbsp/oz/cup chain that
/// still reads naturally, rounding the in-chain result to two decimals.
///
/// Units outside the chain pass through untouched, amount included.
pub fn optimal_unit(amount: f64, unit: Unit) -> Quantity {
    match unit {
        Unit::Tsp if amount >= TSP_PER_TBSP => optimal_unit(amount / TSP_PER_TBSP, Unit::Tbsp),
        Unit::Tbsp if amount >= TBSP_PER_OZ => optimal_unit(amount / TBSP_PER_OZ, Unit::Oz),
        Unit::Oz if amount >= OZ_PER_CUP => optimal_unit(amount / OZ_PER_CUP, Unit::Cup),
        Unit::Tsp | Unit::Tbsp | Unit::Oz | Unit::Cup => Quantity::new(round2(amount), unit),
        _ => Quantity::new(amount, unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn to_ml_converts_the_volume_chain() {
        assert_eq!(to_ml(Quantity::new(2.0, Unit::Oz)), Quantity::new(60.0, Unit::Ml));
        assert_eq!(to_ml(Quantity::new(1.0, Unit::Tsp)), Quantity::new(5.0, Unit::Ml));
        assert_eq!(to_ml(Quantity::new(1.0, Unit::Tbsp)), Quantity::new(15.0, Unit::Ml));
        assert_eq!(to_ml(Quantity::new(0.5, Unit::Cup)), Quantity::new(120.0, Unit::Ml));
    }

    #[test]
    fn to_ml_passes_other_classes_through() {
        assert_eq!(to_ml(Quantity::new(2.0, Unit::Dash)), Quantity::new(2.0, Unit::Dash));
        assert_eq!(to_ml(Quantity::new(30.0, Unit::Gram)), Quantity::new(30.0, Unit::Gram));
        assert_eq!(to_ml(Quantity::new(10.0, Unit::Ml)), Quantity::new(10.0, Unit::Ml));
        assert_eq!(to_ml(Quantity::new(1.0, Unit::Each)), Quantity::new(1.0, Unit::Each));
    }

    #[test]
    fn to_oz_converts_only_milliliters() {
        assert_eq!(to_oz(Quantity::new(45.0, Unit::Ml)), Quantity::new(1.5, Unit::Oz));
        assert_eq!(to_oz(Quantity::new(2.0, Unit::Dash)), Quantity::new(2.0, Unit::Dash));
        assert_eq!(to_oz(Quantity::new(1.0, Unit::Oz)), Quantity::new(1.0, Unit::Oz));
    }

    #[test]
    fn oz_ml_round_trip() {
        let back = to_oz(to_ml(Quantity::new(1.75, Unit::Oz)));
        assert_eq!(back.unit, Unit::Oz);
        assert_relative_eq!(back.amount, 1.75);
    }

    #[test]
    fn optimal_unit_promotes_up_the_chain() {
        assert_eq!(optimal_unit(3.0, Unit::Tsp), Quantity::new(1.0, Unit::Tbsp));
        assert_eq!(optimal_unit(2.0, Unit::Tbsp), Quantity::new(1.0, Unit::Oz));
        assert_eq!(optimal_unit(16.0, Unit::Oz), Quantity::new(1.0, Unit::Cup));
        // Two hops: 6 tsp = 2 tbsp = 1 oz.
        assert_eq!(optimal_unit(6.0, Unit::Tsp), Quantity::new(1.0, Unit::Oz));
        // 96 tsp walks the whole chain up to 1 cup.
        assert_eq!(optimal_unit(96.0, Unit::Tsp), Quantity::new(1.0, Unit::Cup));
    }

    #[test]
    fn optimal_unit_stays_put_below_thresholds() {
        assert_eq!(optimal_unit(2.0, Unit::Tsp), Quantity::new(2.0, Unit::Tsp));
        assert_eq!(optimal_unit(1.5, Unit::Tbsp), Quantity::new(1.5, Unit::Tbsp));
        assert_eq!(optimal_unit(15.9, Unit::Oz), Quantity::new(15.9, Unit::Oz));
        assert_eq!(optimal_unit(0.05, Unit::Oz), Quantity::new(0.05, Unit::Oz));
    }

    #[test]
    fn optimal_unit_rounds_in_chain_results() {
        // 47 tsp -> 15.667 tbsp -> 7.8333 oz, rounded to 7.83.
        assert_eq!(optimal_unit(47.0, Unit::Tsp), Quantity::new(7.83, Unit::Oz));
    }

    #[test]
    fn optimal_unit_ignores_other_units() {
        assert_eq!(optimal_unit(90.0, Unit::Ml), Quantity::new(90.0, Unit::Ml));
        assert_eq!(optimal_unit(12.0, Unit::Dash), Quantity::new(12.0, Unit::Dash));
        assert_eq!(optimal_unit(500.0, Unit::Gram), Quantity::new(500.0, Unit::Gram));
        // Pass-through skips rounding entirely.
        assert_eq!(optimal_unit(1.2345, Unit::Ml), Quantity::new(1.2345, Unit::Ml));
    }
}
