//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when loading the product catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog document could not be decoded.
    #[error("Malformed catalog: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Decode(e.to_string())
    }
}
