//! List command - alphabetical index of a collection.

use std::path::PathBuf;

use colored::Colorize;
use jigger::{Catalog, naming};

use crate::cli::CollectionKind;

pub fn run(
    catalog_path: PathBuf,
    kind: CollectionKind,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&catalog_path)?;

    if verbose {
        eprintln!("Listing {} from {}", kind, catalog_path.display());
    }

    match kind {
        CollectionKind::Recipes => {
            for (letter, recipes) in catalog.recipe_groups() {
                println!("{}", letter.to_string().cyan().bold());
                for recipe in recipes {
                    println!("  {}", catalog.display_name(recipe));
                }
            }
        }
        CollectionKind::Ingredients => {
            for (letter, entries) in catalog.ingredient_groups() {
                println!("{}", letter.to_string().cyan().bold());
                for entry in entries {
                    println!("  {}  {}", entry.name, entry.kind.label().dimmed());
                }
            }
        }
        CollectionKind::Bars => {
            for (letter, bars) in naming::letter_groups(catalog.bars(), |bar| bar.name.as_str()) {
                println!("{}", letter.to_string().cyan().bold());
                for bar in bars {
                    match &bar.location {
                        Some(location) => println!("  {}  {}", bar.name, location.dimmed()),
                        None => println!("  {}", bar.name),
                    }
                }
            }
        }
        CollectionKind::Authors => {
            for (letter, authors) in
                naming::letter_groups(catalog.authors(), |author| author.name.as_str())
            {
                println!("{}", letter.to_string().cyan().bold());
                for author in authors {
                    println!("  {}", author.name);
                }
            }
        }
    }

    Ok(())
}
