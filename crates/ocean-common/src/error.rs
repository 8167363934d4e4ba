//! Error types for geographic lookups.

use thiserror::Error;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Errors raised while interpreting regions, model names and coordinate arrays.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Unknown model source: {0}")]
    UnknownModel(String),

    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Invalid bounding box: {0}")]
    InvalidBbox(String),

    #[error("Coordinate array shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
