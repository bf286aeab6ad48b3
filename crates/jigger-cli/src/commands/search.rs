//! Search command - fuzzy-search a catalog collection.

use std::path::PathBuf;

use colored::Colorize;
use jigger::Catalog;

use crate::cli::CollectionKind;

pub fn run(
    query: String,
    catalog_path: PathBuf,
    kind: CollectionKind,
    limit: usize,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&catalog_path)?;

    if verbose {
        let stats = catalog.stats();
        eprintln!(
            "Loaded {}: {} recipes, {} ingredients, {} bars, {} authors",
            catalog_path.display(),
            stats.recipes,
            stats.ingredients,
            stats.bars,
            stats.authors
        );
    }

    match kind {
        CollectionKind::Recipes => {
            let hits = catalog.search_recipes(&query, limit);
            if json_output {
                let names: Vec<String> = hits
                    .iter()
                    .map(|recipe| catalog.display_name(recipe))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else if hits.is_empty() {
                println!("No recipes match '{}'", query);
            } else {
                println!("{}", format!("{} recipes", hits.len()).cyan().bold());
                for recipe in hits {
                    println!(
                        "  {}  {}",
                        catalog.display_name(recipe).white().bold(),
                        recipe.source.name.dimmed()
                    );
                }
            }
        }
        CollectionKind::Ingredients => {
            let hits = catalog.search_ingredients(&query, limit);
            if json_output {
                let names: Vec<&str> = hits.iter().map(|entry| entry.name.as_str()).collect();
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else if hits.is_empty() {
                println!("No ingredients match '{}'", query);
            } else {
                println!("{}", format!("{} ingredients", hits.len()).cyan().bold());
                for entry in hits {
                    println!(
                        "  {}  {}",
                        entry.name.white().bold(),
                        entry.kind.label().dimmed()
                    );
                }
            }
        }
        CollectionKind::Bars => {
            let hits = catalog.search_bars(&query, limit);
            if json_output {
                let names: Vec<&str> = hits.iter().map(|bar| bar.name.as_str()).collect();
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else if hits.is_empty() {
                println!("No bars match '{}'", query);
            } else {
                println!("{}", format!("{} bars", hits.len()).cyan().bold());
                for bar in hits {
                    match &bar.location {
                        Some(location) => println!(
                            "  {}  {}",
                            bar.name.white().bold(),
                            location.dimmed()
                        ),
                        None => println!("  {}", bar.name.white().bold()),
                    }
                }
            }
        }
        CollectionKind::Authors => {
            let hits = catalog.search_authors(&query, limit);
            if json_output {
                let names: Vec<&str> = hits.iter().map(|author| author.name.as_str()).collect();
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else if hits.is_empty() {
                println!("No authors match '{}'", query);
            } else {
                println!("{}", format!("{} authors", hits.len()).cyan().bold());
                for author in hits {
                    println!("  {}", author.name.white().bold());
                }
            }
        }
    }

    Ok(())
}
