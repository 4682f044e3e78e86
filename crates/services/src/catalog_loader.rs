//! Loads the level catalog from its JSON authoring format.
//!
//! The catalog is read once at startup and treated as read-only
//! configuration. Malformed files fail fast with a descriptive error naming
//! the offending entry.

use std::fs;
use std::path::Path;

use quiz_core::catalog::Catalog;
use quiz_core::model::LevelDefinition;

use crate::error::CatalogLoadError;

/// Parses and validates a catalog from JSON text (an array of level records).
///
/// # Errors
///
/// Returns `CatalogLoadError::Parse` for malformed JSON and
/// `CatalogLoadError::Invalid` for entries that fail validation.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogLoadError> {
    let levels: Vec<LevelDefinition> = serde_json::from_str(json)?;
    Ok(Catalog::new(levels)?)
}

/// Reads, parses, and validates the catalog file at `path`.
///
/// # Errors
///
/// Returns `CatalogLoadError::Io` when the file cannot be read, otherwise the
/// errors of [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&json)
}
