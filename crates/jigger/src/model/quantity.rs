//! Measurement units and quantities for recipe ingredients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The measurement system a unit belongs to.
///
/// Conversion and rounding rules are class-local; a conversion asked of the
/// wrong class passes the quantity through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitClass {
    /// US volume measures plus whole items.
    Imperial,
    /// Milliliters.
    Metric,
    /// Grams.
    Weight,
    /// Discrete pours: dashes, drops, sprays, pinches, bottles, parts.
    Counting,
}

impl UnitClass {
    /// Human-readable name of the class.
    pub fn label(&self) -> &'static str {
        match self {
            UnitClass::Imperial => "imperial",
            UnitClass::Metric => "metric",
            UnitClass::Weight => "weight",
            UnitClass::Counting => "counting",
        }
    }
}

/// A unit of measure as written in a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Fluid ounce.
    Oz,
    /// Teaspoon.
    Tsp,
    /// Tablespoon.
    Tbsp,
    /// Cup.
    Cup,
    /// Milliliter.
    Ml,
    /// Gram.
    Gram,
    /// One whole item: an egg, a sugar cube, a lime.
    #[serde(rename = "unit")]
    Each,
    /// A full bottle, for batched builds.
    Bottle,
    /// A dash from a bitters bottle.
    Dash,
    /// A drop from a pipette or dasher.
    Drop,
    /// A pinch of a dry ingredient.
    Pinch,
    /// A spray from an atomizer.
    Spray,
    /// A relative part, for ratio-style recipes.
    Part,
}

impl Unit {
    /// The measurement class this unit converts and rounds within.
    pub fn class(&self) -> UnitClass {
        match self {
            Unit::Oz | Unit::Tsp | Unit::Tbsp | Unit::Cup | Unit::Each => UnitClass::Imperial,
            Unit::Ml => UnitClass::Metric,
            Unit::Gram => UnitClass::Weight,
            Unit::Bottle | Unit::Dash | Unit::Drop | Unit::Pinch | Unit::Spray | Unit::Part => {
                UnitClass::Counting
            }
        }
    }

    /// The canonical lowercase symbol, matching the serialized form.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Oz => "oz",
            Unit::Tsp => "tsp",
            Unit::Tbsp => "tbsp",
            Unit::Cup => "cup",
            Unit::Ml => "ml",
            Unit::Gram => "gram",
            Unit::Each => "unit",
            Unit::Bottle => "bottle",
            Unit::Dash => "dash",
            Unit::Drop => "drop",
            Unit::Pinch => "pinch",
            Unit::Spray => "spray",
            Unit::Part => "part",
        }
    }

    /// Display label pluralized for the given amount.
    ///
    /// `Each` has no label: "2 limes" reads from the ingredient name, not
    /// the unit.
    pub fn label(&self, amount: f64) -> &'static str {
        let plural = amount != 1.0;
        match self {
            Unit::Oz => "oz",
            Unit::Tsp => "tsp",
            Unit::Tbsp => "tbsp",
            Unit::Cup => {
                if plural {
                    "cups"
                } else {
                    "cup"
                }
            }
            Unit::Ml => "ml",
            Unit::Gram => "g",
            Unit::Each => "",
            Unit::Bottle => {
                if plural {
                    "bottles"
                } else {
                    "bottle"
                }
            }
            Unit::Dash => {
                if plural {
                    "dashes"
                } else {
                    "dash"
                }
            }
            Unit::Drop => {
                if plural {
                    "drops"
                } else {
                    "drop"
                }
            }
            Unit::Pinch => {
                if plural {
                    "pinches"
                } else {
                    "pinch"
                }
            }
            Unit::Spray => {
                if plural {
                    "sprays"
                } else {
                    "spray"
                }
            }
            Unit::Part => {
                if plural {
                    "parts"
                } else {
                    "part"
                }
            }
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oz" | "ounce" | "ounces" => Ok(Unit::Oz),
            "tsp" | "teaspoon" | "teaspoons" => Ok(Unit::Tsp),
            "tbsp" | "tablespoon" | "tablespoons" => Ok(Unit::Tbsp),
            "cup" | "cups" => Ok(Unit::Cup),
            "ml" | "milliliter" | "milliliters" => Ok(Unit::Ml),
            "g" | "gram" | "grams" => Ok(Unit::Gram),
            "unit" | "each" => Ok(Unit::Each),
            "bottle" | "bottles" => Ok(Unit::Bottle),
            "dash" | "dashes" => Ok(Unit::Dash),
            "drop" | "drops" => Ok(Unit::Drop),
            "pinch" | "pinches" => Ok(Unit::Pinch),
            "spray" | "sprays" => Ok(Unit::Spray),
            "part" | "parts" => Ok(Unit::Part),
            _ => Err(format!("Unknown unit: {s}")),
        }
    }
}

/// An amount of an ingredient in a specific unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Non-negative amount in `unit`s.
    pub amount: f64,
    /// Unit the amount is expressed in.
    pub unit: Unit,
}

impl Quantity {
    /// Create a quantity.
    pub fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit }
    }

    /// The measurement class of this quantity's unit.
    pub fn class(&self) -> UnitClass {
        self.unit.class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_classes() {
        assert_eq!(Unit::Oz.class(), UnitClass::Imperial);
        assert_eq!(Unit::Each.class(), UnitClass::Imperial);
        assert_eq!(Unit::Ml.class(), UnitClass::Metric);
        assert_eq!(Unit::Gram.class(), UnitClass::Weight);
        assert_eq!(Unit::Dash.class(), UnitClass::Counting);
        assert_eq!(Unit::Part.class(), UnitClass::Counting);
    }

    #[test]
    fn unit_serde_names() {
        assert_eq!(serde_json::to_string(&Unit::Oz).unwrap(), "\"oz\"");
        assert_eq!(serde_json::to_string(&Unit::Each).unwrap(), "\"unit\"");
        assert_eq!(serde_json::to_string(&Unit::Gram).unwrap(), "\"gram\"");

        let unit: Unit = serde_json::from_str("\"tbsp\"").unwrap();
        assert_eq!(unit, Unit::Tbsp);
        let each: Unit = serde_json::from_str("\"unit\"").unwrap();
        assert_eq!(each, Unit::Each);
    }

    #[test]
    fn unit_from_str_accepts_aliases() {
        assert_eq!("oz".parse::<Unit>().unwrap(), Unit::Oz);
        assert_eq!("Ounces".parse::<Unit>().unwrap(), Unit::Oz);
        assert_eq!("each".parse::<Unit>().unwrap(), Unit::Each);
        assert_eq!("ML".parse::<Unit>().unwrap(), Unit::Ml);
        assert!("furlong".parse::<Unit>().is_err());
    }

    #[test]
    fn labels_pluralize() {
        assert_eq!(Unit::Dash.label(1.0), "dash");
        assert_eq!(Unit::Dash.label(2.0), "dashes");
        assert_eq!(Unit::Cup.label(0.5), "cups");
        assert_eq!(Unit::Oz.label(2.0), "oz");
        assert_eq!(Unit::Each.label(3.0), "");
    }
}
