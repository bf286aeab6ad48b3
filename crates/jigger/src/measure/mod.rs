//! Measurement conversion, rounding, scaling, and display formatting.

mod convert;
mod format;
mod round;
mod scale;

pub use convert::{ML_PER_CUP, ML_PER_OZ, ML_PER_TBSP, ML_PER_TSP, optimal_unit, to_ml, to_oz};
pub use format::{format_amount, format_quantity};
pub use round::{friendly_fraction, friendly_ml};
pub use scale::{ScaledQuantity, scale_factor, scale_quantity};
