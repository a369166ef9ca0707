//! Style store error types

use thiserror::Error;

/// Errors surfaced by the style and template stores
#[derive(Error, Debug)]
pub enum StyleError {
    /// Requested template is not in the catalog
    #[error("Template '{0}' not found")]
    UnknownTemplate(String),

    /// Catalog or configuration JSON could not be parsed
    #[error("Failed to parse template catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

/// Result type for style store operations
pub type Result<T> = std::result::Result<T, StyleError>;
