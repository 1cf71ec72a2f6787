//! Errors at the catalog decoding boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to decode catalog payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected catalog payload: {0}")]
    Shape(String),
}
