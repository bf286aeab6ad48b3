//! Rendering quantities the way a printed recipe would.

use crate::model::{Quantity, Unit, UnitClass};

use super::convert::round2;
use super::round::friendly_fraction;

/// Vulgar-fraction glyphs for imperial remainders, eighths through
/// seven-eighths plus the snapped thirds.
const FRACTION_GLYPHS: [(f64, &str); 9] = [
    (0.125, "⅛"),
    (0.25, "¼"),
    (0.33, "⅓"),
    (0.375, "⅜"),
    (0.5, "½"),
    (0.625, "⅝"),
    (0.67, "⅔"),
    (0.75, "¾"),
    (0.875, "⅞"),
];

/// Tolerance when matching a remainder against the glyph table.
const GLYPH_EPSILON: f64 = 0.01;

/// The glyph for a fractional remainder, if one sits close enough.
fn fraction_glyph(fraction: f64) -> Option<&'static str> {
    FRACTION_GLYPHS
        .iter()
        .find(|(value, _)| (fraction - value).abs() < GLYPH_EPSILON)
        .map(|(_, glyph)| *glyph)
}

/// Plain decimal with at most two places and no trailing zeros.
fn format_decimal(amount: f64) -> String {
    let rounded = round2(amount);
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Mixed number with a vulgar-fraction glyph: "1 ½", "¾", "2".
fn format_imperial(amount: f64) -> String {
    let friendly = friendly_fraction(amount);
    let whole = friendly.trunc() as i64;
    let fraction = friendly - friendly.trunc();

    match (whole, fraction_glyph(fraction)) {
        (0, Some(glyph)) => glyph.to_string(),
        (_, Some(glyph)) => format!("{whole} {glyph}"),
        (_, None) => format_decimal(friendly),
    }
}

/// Format a bare amount in the display style of its unit's class:
/// mixed-number fractions for imperial volumes, plain decimals for metric
/// and weight, whole numbers for counted pours.
pub fn format_amount(amount: f64, unit: Unit) -> String {
    match unit.class() {
        UnitClass::Imperial => format_imperial(amount),
        UnitClass::Metric | UnitClass::Weight => format_decimal(amount),
        UnitClass::Counting => format!("{}", amount.round() as i64),
    }
}

/// Format a quantity with its pluralized unit label: "1 ½ oz", "7.5 ml",
/// "2 dashes". `Each` quantities render as the bare number.
pub fn format_quantity(quantity: &Quantity) -> String {
    let label = match quantity.unit.class() {
        // Counting labels pluralize on the displayed whole number.
        UnitClass::Counting => quantity.unit.label(quantity.amount.round()),
        _ => quantity.unit.label(quantity.amount),
    };
    let amount = format_amount(quantity.amount, quantity.unit);
    if label.is_empty() {
        amount
    } else {
        format!("{amount} {label}")
    }
}
