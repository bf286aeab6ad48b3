//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use jigger::model::Unit;

/// Jigger: cocktail catalog search and measurement tool
#[derive(Parser)]
#[command(name = "jigger")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fuzzy-search a catalog collection
    Search {
        /// Search text (accents and case optional)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Path to the catalog JSON file
        #[arg(short, long, default_value = "catalog.json")]
        catalog: PathBuf,

        /// Collection to search
        #[arg(short, long, default_value = "recipes")]
        kind: CollectionKind,

        /// Maximum number of results
        #[arg(short, long, default_value_t = jigger::DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one recipe with scaled, build-ordered ingredients
    Show {
        /// Recipe name (case-insensitive)
        #[arg(value_name = "NAME")]
        name: String,

        /// Path to the catalog JSON file
        #[arg(short, long, default_value = "catalog.json")]
        catalog: PathBuf,

        /// Scale the recipe to this many servings
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=50))]
        servings: Option<u32>,

        /// Convert imperial measures to milliliters
        #[arg(long)]
        metric: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert an amount between measurement units
    Convert {
        /// Amount to convert
        #[arg(value_name = "AMOUNT")]
        amount: f64,

        /// Unit the amount is written in (oz, tsp, tbsp, cup, ml, ...)
        #[arg(value_name = "UNIT")]
        unit: Unit,

        /// Conversion to apply
        #[arg(long, default_value = "optimal")]
        to: ConversionTarget,
    },

    /// List a collection grouped by index letter
    List {
        /// Path to the catalog JSON file
        #[arg(short, long, default_value = "catalog.json")]
        catalog: PathBuf,

        /// Collection to list
        #[arg(short, long, default_value = "recipes")]
        kind: CollectionKind,
    },
}

/// Which catalog collection a command operates on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollectionKind {
    #[default]
    Recipes,
    Ingredients,
    Bars,
    Authors,
}

impl std::str::FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recipes" | "recipe" => Ok(CollectionKind::Recipes),
            "ingredients" | "ingredient" => Ok(CollectionKind::Ingredients),
            "bars" | "bar" => Ok(CollectionKind::Bars),
            "authors" | "author" => Ok(CollectionKind::Authors),
            _ => Err(format!(
                "Unknown collection: {}. Use recipes, ingredients, bars, or authors.",
                s
            )),
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionKind::Recipes => write!(f, "recipes"),
            CollectionKind::Ingredients => write!(f, "ingredients"),
            CollectionKind::Bars => write!(f, "bars"),
            CollectionKind::Authors => write!(f, "authors"),
        }
    }
}

/// Conversion applied by the convert command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversionTarget {
    /// Promote to the largest readable unit.
    #[default]
    Optimal,
    /// Convert imperial volumes to milliliters.
    Ml,
    /// Convert milliliters to fluid ounces.
    Oz,
}

impl std::str::FromStr for ConversionTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "optimal" => Ok(ConversionTarget::Optimal),
            "ml" => Ok(ConversionTarget::Ml),
            "oz" => Ok(ConversionTarget::Oz),
            _ => Err(format!("Unknown target: {}. Use optimal, ml, or oz.", s)),
        }
    }
}

impl std::fmt::Display for ConversionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionTarget::Optimal => write!(f, "optimal"),
            ConversionTarget::Ml => write!(f, "ml"),
            ConversionTarget::Oz => write!(f, "oz"),
        }
    }
}
