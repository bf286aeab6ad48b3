//! Example: Browse a cocktail catalog with Jigger.
//!
//! Usage:
//!   cargo run --example browse -- <catalog.json> [query]
//!
//! Example:
//!   cargo run --example browse -- catalog.json daiquiri

use std::env;
use std::path::Path;

use jigger::measure::{format_quantity, scale_quantity};
use jigger::{AttributionExclusions, Catalog, Recipe, build_order, resolve_attribution};

fn main() -> jigger::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example browse -- <catalog.json> [query]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example browse -- catalog.json daiquiri");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Jigger Catalog: {}", file_path);
    println!("{}", separator);
    println!();

    let catalog = Catalog::load(path)?;
    let stats = catalog.stats();

    // Print collection counts
    println!("## Contents");
    println!("  Recipes: {}", stats.recipes);
    println!("  Ingredients: {}", stats.ingredients);
    println!("  Bars: {}", stats.bars);
    println!("  Authors: {}", stats.authors);
    println!();

    // Print the alphabetical index
    println!("## Index");
    for (letter, recipes) in catalog.recipe_groups() {
        let names: Vec<String> = recipes
            .iter()
            .map(|recipe| catalog.display_name(recipe))
            .collect();
        println!("  {}  {}", letter, names.join(", "));
    }
    println!();

    // Search when a query was given, otherwise show the first recipe
    let selected: Option<&Recipe> = match args.get(2) {
        Some(query) => {
            let hits = catalog.search_recipes(query, 10);
            println!("## Search: '{}' ({} matches)", query, hits.len());
            for recipe in &hits {
                println!("  {}", catalog.display_name(recipe));
            }
            println!();
            hits.first().copied()
        }
        None => catalog.recipes().first(),
    };

    let Some(recipe) = selected else {
        println!("{}", separator);
        return Ok(());
    };

    // Render the selected recipe the way a site page would
    println!("## {}", catalog.display_name(recipe));
    if let Some(credit) = resolve_attribution(recipe, &AttributionExclusions::none()) {
        println!("  credit: {}", credit);
    }
    if let Some(glassware) = &recipe.glassware {
        println!("  glass: {}", glassware);
    }
    println!();

    for ingredient in build_order(&recipe.ingredients) {
        let scaled = scale_quantity(ingredient.quantity, 1.0);
        println!(
            "  {:>10}  {}",
            format_quantity(&scaled.quantity()),
            ingredient.name
        );
    }

    if !recipe.instructions.is_empty() {
        println!();
        for (step, instruction) in recipe.instructions.iter().enumerate() {
            println!("  {}. {}", step + 1, instruction);
        }
    }

    println!();
    println!("{}", separator);

    Ok(())
}
