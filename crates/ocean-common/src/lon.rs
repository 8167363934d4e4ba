//! Longitude conventions.
//!
//! GOFS publishes longitudes in [0, 360) while RTOFS, CMEMS and storm tracks
//! use [-180, 180]. Every comparison has to convert one side first.

use serde::{Deserialize, Serialize};

/// Longitude range used by a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LonConvention {
    /// Longitudes in [-180, 180].
    Signed180,
    /// Longitudes in [0, 360).
    Positive360,
}

impl LonConvention {
    /// Convert a single longitude into this convention.
    pub fn convert(&self, lon: f64) -> f64 {
        match self {
            LonConvention::Signed180 => to_signed_180(lon),
            LonConvention::Positive360 => to_positive_360(lon),
        }
    }

    /// Convert every longitude in a slice into this convention.
    pub fn convert_all(&self, lons: &[f64]) -> Vec<f64> {
        lons.iter().map(|&lon| self.convert(lon)).collect()
    }

    /// Guess the convention of a longitude axis: anything east of 180 means
    /// the axis runs 0-360.
    pub fn detect(lons: &[f64]) -> Self {
        if lons.iter().any(|&lon| lon > 180.0) {
            LonConvention::Positive360
        } else {
            LonConvention::Signed180
        }
    }
}

impl Default for LonConvention {
    fn default() -> Self {
        Self::Signed180
    }
}

/// Map a [-180, 180] longitude onto [0, 360).
#[inline]
pub fn to_positive_360(lon: f64) -> f64 {
    if lon < 0.0 {
        lon + 360.0
    } else {
        lon
    }
}

/// Map a [0, 360) longitude onto [-180, 180].
#[inline]
pub fn to_signed_180(lon: f64) -> f64 {
    if lon > 180.0 {
        lon - 360.0
    } else {
        lon
    }
}
