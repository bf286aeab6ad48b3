//! Loading catalog content from JSON.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::error::{JiggerError, Result};
use crate::model::{Author, Bar, IngredientEntry, Recipe};

/// On-disk shape of a catalog content file. Every collection is optional,
/// so a recipes-only file loads cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
    #[serde(default)]
    pub bars: Vec<Bar>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        Catalog::new(file.recipes, file.ingredients, file.bars, file.authors)
    }
}

impl Catalog {
    /// Load a catalog from a JSON content file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| JiggerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content: CatalogFile = serde_json::from_reader(BufReader::new(file))?;
        Ok(content.into())
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let content: CatalogFile = serde_json::from_str(json)?;
        Ok(content.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_accepts_partial_documents() {
        let catalog = Catalog::from_json(r#"{ "bars": [{ "name": "Attaboy" }] }"#).unwrap();
        assert_eq!(catalog.stats().bars, 1);
        assert_eq!(catalog.stats().recipes, 0);

        let empty = Catalog::from_json("{}").unwrap();
        assert_eq!(empty.stats(), crate::catalog::CatalogStats::default());
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        let error = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(error, JiggerError::Json(_)));
    }

    #[test]
    fn load_reports_missing_files_with_their_path() {
        let error = Catalog::load("/nonexistent/catalog.json").unwrap_err();
        match error {
            JiggerError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/catalog.json"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
