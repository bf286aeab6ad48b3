//! Jigger CLI - cocktail catalog search and measurement tool.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            query,
            catalog,
            kind,
            limit,
            json,
        } => commands::search::run(query, catalog, kind, limit, json, cli.verbose),

        Commands::Show {
            name,
            catalog,
            servings,
            metric,
            json,
        } => commands::show::run(name, catalog, servings, metric, json, cli.verbose),

        Commands::Convert { amount, unit, to } => commands::convert::run(amount, unit, to, cli.verbose),

        Commands::List { catalog, kind } => commands::list::run(catalog, kind, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
