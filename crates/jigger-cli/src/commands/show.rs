//! Show command - render one recipe with scaled, build-ordered ingredients.

use std::path::PathBuf;

use colored::Colorize;
use jigger::measure::{format_quantity, friendly_ml, scale_factor, scale_quantity, to_ml};
use jigger::model::{Quantity, Unit};
use jigger::{AttributionExclusions, Catalog, build_order, resolve_attribution};

/// Convert a scaled quantity to milliliters and snap it to the pourable
/// grid. Quantities outside the imperial volume chain come back unchanged.
fn metric_quantity(quantity: Quantity) -> Quantity {
    let converted = to_ml(quantity);
    match converted.unit {
        Unit::Ml => Quantity::new(friendly_ml(converted.amount), Unit::Ml),
        _ => converted,
    }
}

pub fn run(
    name: String,
    catalog_path: PathBuf,
    servings: Option<u32>,
    metric: bool,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&catalog_path)?;

    let recipe = catalog.recipe_named(&name).ok_or_else(|| {
        format!(
            "No recipe named '{}' in {}",
            name,
            catalog_path.display()
        )
    })?;

    let target_servings = servings.unwrap_or(recipe.servings);
    let factor = scale_factor(f64::from(recipe.servings), f64::from(target_servings));

    if verbose && factor != 1.0 {
        eprintln!(
            "Scaling from {} to {} servings (factor {:.2})",
            recipe.servings, target_servings, factor
        );
    }

    let ordered = build_order(&recipe.ingredients);
    let credit = resolve_attribution(recipe, &AttributionExclusions::none());

    if json_output {
        let lines: Vec<serde_json::Value> = ordered
            .iter()
            .map(|ingredient| {
                let scaled = scale_quantity(ingredient.quantity, factor);
                let quantity = if metric {
                    metric_quantity(scaled.quantity())
                } else {
                    scaled.quantity()
                };
                let techniques: Vec<String> = ingredient
                    .techniques
                    .iter()
                    .map(|technique| technique.label())
                    .collect();
                serde_json::json!({
                    "name": ingredient.name,
                    "kind": ingredient.kind.label(),
                    "amount": quantity.amount,
                    "unit": quantity.unit.symbol(),
                    "display": format_quantity(&quantity),
                    "techniques": techniques,
                })
            })
            .collect();

        let output = serde_json::json!({
            "name": recipe.name,
            "servings": target_servings,
            "glassware": recipe.glassware,
            "attribution": credit,
            "ingredients": lines,
            "instructions": recipe.instructions,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", catalog.display_name(recipe).cyan().bold());
    if let Some(credit) = &credit {
        println!("{}", credit.dimmed());
    }
    if let Some(glassware) = &recipe.glassware {
        println!("Serve in: {}", glassware);
    }
    if target_servings != 1 {
        println!("Servings: {}", target_servings);
    }
    println!();

    for ingredient in ordered {
        let scaled = scale_quantity(ingredient.quantity, factor);
        let quantity = if metric {
            metric_quantity(scaled.quantity())
        } else {
            scaled.quantity()
        };

        // Pad before coloring; escape codes would skew the column width.
        let amount = format!("{:>10}", format_quantity(&quantity));
        let mut line = format!("  {}  {}", amount.white().bold(), ingredient.name);
        if !ingredient.techniques.is_empty() {
            let labels: Vec<String> = ingredient
                .techniques
                .iter()
                .map(|technique| technique.label())
                .collect();
            line.push_str(&format!(" {}", format!("({})", labels.join(", ")).dimmed()));
        }
        println!("{}", line);
    }

    if !recipe.instructions.is_empty() {
        println!();
        for (step, instruction) in recipe.instructions.iter().enumerate() {
            println!("  {}. {}", step + 1, instruction);
        }
    }

    Ok(())
}
