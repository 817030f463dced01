//! Catalog loading errors
//!
//! The catalog is read once at startup. Every failure here is fatal for the
//! session, so the variants carry enough context to tell a broken bundled file
//! from a bad user-supplied dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the brand catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset is not valid JSON or does not match the brand schema
    #[error("Invalid brand dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same id
    #[error("Duplicate brand id {0} in dataset")]
    DuplicateId(u32),

    /// A dataset file could not be read
    #[error("Could not read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
