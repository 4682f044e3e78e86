//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::catalog::CatalogError;

/// Errors emitted while loading the level catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}
