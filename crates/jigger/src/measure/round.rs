//! Friendly rounding for display amounts.

use super::convert::round2;

/// Fraction targets a remainder may snap to, in ascending order. Scanning
/// in this order means ties land on the smaller target.
const FRACTION_TARGETS: [f64; 7] = [0.0, 0.25, 0.33, 0.5, 0.67, 0.75, 1.0];

/// Snap an amount to its nearest kitchen-friendly fraction.
///
/// The integer part stays; the remainder moves to the closest entry in
/// `FRACTION_TARGETS`. A remainder nearer to 1 than to 0.75 rolls over into
/// the next whole number. The result is rounded to two decimals so thirds
/// come back as exactly x.33 and x.67.
pub fn friendly_fraction(amount: f64) -> f64 {
    let base = amount.floor();
    let remainder = amount - base;

    let mut snapped = 0.0;
    let mut best = f64::INFINITY;
    for target in FRACTION_TARGETS {
        let distance = (remainder - target).abs();
        if distance < best {
            best = distance;
            snapped = target;
        }
    }

    round2(base + snapped)
}

/// Milliliter step below [`ML_STEP_CUTOFF`].
const ML_SMALL_STEP: f64 = 2.5;
/// Milliliter step at and above the cutoff.
const ML_LARGE_STEP: f64 = 5.0;
/// Amount at which the rounding step widens.
const ML_STEP_CUTOFF: f64 = 15.0;

/// Round a milliliter amount to the nearest pourable step: 2.5 ml below
/// 15 ml, 5 ml from there up.
pub fn friendly_ml(amount: f64) -> f64 {
    let step = if amount < ML_STEP_CUTOFF {
        ML_SMALL_STEP
    } else {
        ML_LARGE_STEP
    };
    (amount / step).round() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_snap_to_targets() {
        assert_eq!(friendly_fraction(1.7), 1.67);
        assert_eq!(friendly_fraction(0.3), 0.33);
        assert_eq!(friendly_fraction(2.2), 2.25);
        assert_eq!(friendly_fraction(0.55), 0.5);
        assert_eq!(friendly_fraction(1.0), 1.0);
        assert_eq!(friendly_fraction(3.0), 3.0);
        assert_eq!(friendly_fraction(0.0), 0.0);
    }

    #[test]
    fn fraction_near_one_rolls_over() {
        assert_eq!(friendly_fraction(1.95), 2.0);
        assert_eq!(friendly_fraction(0.9), 1.0);
    }

    #[test]
    fn fraction_ties_take_the_smaller_target() {
        // 0.125 sits exactly between 0 and 0.25.
        assert_eq!(friendly_fraction(2.125), 2.0);
        // 0.875 sits exactly between 0.75 and 1.
        assert_eq!(friendly_fraction(2.875), 2.75);
    }

    #[test]
    fn ml_rounds_to_pourable_steps() {
        assert_eq!(friendly_ml(7.0), 7.5);
        assert_eq!(friendly_ml(51.0), 50.0);
        assert_eq!(friendly_ml(22.4), 20.0);
        assert_eq!(friendly_ml(3.7), 2.5);
        assert_eq!(friendly_ml(0.0), 0.0);
    }

    #[test]
    fn ml_cutoff_uses_the_wide_step() {
        // 15 is not below the cutoff, so it rounds on the 5 ml grid.
        assert_eq!(friendly_ml(15.0), 15.0);
        assert_eq!(friendly_ml(14.9), 15.0);
        assert_eq!(friendly_ml(13.0), 12.5);
    }
}
