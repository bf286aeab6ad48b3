//! Jigger: the search, measurement, and attribution core of a cocktail
//! recipe catalog.
//!
//! Jigger powers a recipe site's data layer: everything here is a pure
//! transformation over plain recipe records, so rendering stays a thin
//! concern on top.
//!
//! # Core Principles
//!
//! - **Total functions**: measurement, naming, ordering, and attribution
//!   never fail; out-of-range input degrades to a safe default
//! - **Snapshot, not store**: a [`Catalog`] owns loaded content and its
//!   derived indexes; nothing mutates after construction
//! - **Deterministic ordering**: every comparator is a total order, so the
//!   same catalog always renders the same way
//!
//! # Example
//!
//! ```
//! use jigger::measure::{optimal_unit, scale_quantity};
//! use jigger::model::{Quantity, Unit};
//!
//! // 2 tbsp doubled reads as 2 oz, not 4 tbsp.
//! let written = Quantity::new(2.0, Unit::Tbsp);
//! let doubled = scale_quantity(written, 2.0);
//! assert_eq!(doubled.quantity(), Quantity::new(2.0, Unit::Oz));
//!
//! assert_eq!(optimal_unit(6.0, Unit::Tsp), Quantity::new(1.0, Unit::Oz));
//! ```

pub mod attribution;
pub mod catalog;
pub mod error;
pub mod measure;
pub mod model;
pub mod naming;
pub mod ordering;
pub mod search;

pub use attribution::{AttributionExclusions, resolve_attribution};
pub use catalog::{Catalog, CatalogFile, CatalogStats};
pub use error::{JiggerError, Result};
pub use measure::{
    ScaledQuantity, format_quantity, friendly_fraction, friendly_ml, optimal_unit, scale_factor,
    scale_quantity, to_ml, to_oz,
};
pub use model::{Ingredient, IngredientEntry, Quantity, Recipe, Unit};
pub use ordering::{build_order, compare_ingredients};
pub use search::{DEFAULT_SEARCH_LIMIT, fuzzy_search};
