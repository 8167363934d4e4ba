//! Error types for ocean analysis.

use ocean_common::GeoError;
use thiserror::Error;

/// Errors that can occur while building transects or integrating profiles.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input track cannot be densified.
    #[error("invalid track: {0}")]
    InvalidTrack(String),

    /// Two consecutive track vertices share a longitude, so the segment has
    /// no finite slope.
    #[error("degenerate transect segment {index}: both vertices at longitude {lon}")]
    DegenerateSegment { index: usize, lon: f64 },

    /// Paired arrays do not have matching lengths.
    #[error("shape mismatch for {what}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// A coordinate axis is empty or not strictly increasing.
    #[error("invalid axis '{axis}': {message}")]
    InvalidAxis { axis: String, message: String },

    /// A selection matched no grid cells or samples.
    #[error("empty selection: {0}")]
    EmptySelection(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Geographic lookup error.
    #[error(transparent)]
    Geo(#[from] GeoError),
}

impl AnalysisError {
    /// Create an InvalidTrack error.
    pub fn invalid_track(msg: impl Into<String>) -> Self {
        Self::InvalidTrack(msg.into())
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Create an InvalidAxis error.
    pub fn invalid_axis(axis: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAxis {
            axis: axis.into(),
            message: message.into(),
        }
    }

    /// Create an EmptySelection error.
    pub fn empty_selection(msg: impl Into<String>) -> Self {
        Self::EmptySelection(msg.into())
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl From<serde_yaml::Error> for AnalysisError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ConfigError(format!("YAML error: {}", err))
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
