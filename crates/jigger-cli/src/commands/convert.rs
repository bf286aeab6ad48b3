//! Convert command - the unit conversion calculators.

use colored::Colorize;
use jigger::measure::{format_quantity, optimal_unit, to_ml, to_oz};
use jigger::model::{Quantity, Unit};

use crate::cli::ConversionTarget;

pub fn run(
    amount: f64,
    unit: Unit,
    target: ConversionTarget,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(format!("Amount must be a non-negative number, got {}", amount).into());
    }

    let quantity = Quantity::new(amount, unit);
    let converted = match target {
        ConversionTarget::Optimal => optimal_unit(quantity.amount, quantity.unit),
        ConversionTarget::Ml => to_ml(quantity),
        ConversionTarget::Oz => to_oz(quantity),
    };

    if verbose && converted == quantity {
        eprintln!(
            "No {} conversion applies to {} measures; returning the input unchanged",
            target,
            unit.class().label()
        );
    }

    println!(
        "{} = {}",
        format_quantity(&quantity),
        format_quantity(&converted).green().bold()
    );

    Ok(())
}
