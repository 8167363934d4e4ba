//! Bounding box types and named study regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::axis::axis_mask;
use crate::error::{GeoError, GeoResult};

/// A geographic bounding box in degrees, longitudes in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Create a bounding box, rejecting inverted or non-finite corners.
    pub fn try_new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> GeoResult<Self> {
        let corners = [min_lon, min_lat, max_lon, max_lat];
        if corners.iter().any(|v| !v.is_finite()) {
            return Err(GeoError::InvalidBbox(format!("non-finite corner in {:?}", corners)));
        }
        if min_lon >= max_lon || min_lat >= max_lat {
            return Err(GeoError::InvalidBbox(format!(
                "min must be below max: lon {}..{}, lat {}..{}",
                min_lon, max_lon, min_lat, max_lat
            )));
        }
        Ok(Self::new(min_lon, min_lat, max_lon, max_lat))
    }

    /// Build from the `[lon min, lon max, lat min, lat max]` limit order used
    /// by plotting extents and subset requests.
    pub fn from_limits(limits: [f64; 4]) -> GeoResult<Self> {
        Self::try_new(limits[0], limits[2], limits[1], limits[3])
    }

    /// Limits in `[lon min, lon max, lat min, lat max]` order.
    pub fn limits(&self) -> [f64; 4] {
        [self.min_lon, self.max_lon, self.min_lat, self.max_lat]
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Center point as (lon, lat).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Check if a point is inside or on the edge of this bbox.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// Check if a point is strictly inside this bbox.
    ///
    /// Grid subsetting uses open intervals, so cells exactly on an edge are
    /// excluded.
    pub fn contains_strict(&self, lon: f64, lat: f64) -> bool {
        lon > self.min_lon && lon < self.max_lon && lat > self.min_lat && lat < self.max_lat
    }

    /// Check if this bbox intersects another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_lon < other.max_lon
            && self.max_lon > other.min_lon
            && self.min_lat < other.max_lat
            && self.max_lat > other.min_lat
    }

    /// Expand the box by `margin` degrees on every side.
    pub fn padded(&self, margin: f64) -> Self {
        Self {
            min_lon: self.min_lon - margin,
            min_lat: self.min_lat - margin,
            max_lon: self.max_lon + margin,
            max_lat: self.max_lat + margin,
        }
    }

    /// Strict masks of a longitude and a latitude axis against the box.
    /// Longitudes must already be in the box's convention.
    pub fn mask_axes(&self, lons: &[f64], lats: &[f64]) -> (Vec<bool>, Vec<bool>) {
        (
            axis_mask(lons, self.min_lon, self.max_lon),
            axis_mask(lats, self.min_lat, self.max_lat),
        )
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.min_lon, self.max_lon, self.min_lat, self.max_lat
        )
    }
}

/// Named regions used for storm studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Gulf of Mexico.
    GulfOfMexico,
}

impl Region {
    /// Short name used in configuration and output naming.
    pub fn name(&self) -> &'static str {
        match self {
            Region::GulfOfMexico => "GoMex",
        }
    }

    /// Map extent of the region.
    pub fn bbox(&self) -> BoundingBox {
        match self {
            Region::GulfOfMexico => BoundingBox::new(-100.0, 18.0, -80.0, 32.0),
        }
    }

    /// All known regions.
    pub fn all() -> &'static [Region] {
        &[Region::GulfOfMexico]
    }
}

impl FromStr for Region {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gomex" | "gulf_of_mexico" | "gulfofmexico" => Ok(Region::GulfOfMexico),
            _ => Err(GeoError::UnknownRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
