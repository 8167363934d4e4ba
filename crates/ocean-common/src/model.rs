//! Ocean model sources and their naming conventions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::lon::LonConvention;

/// Physical variable compared between models and observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    /// Sea water temperature (degrees C).
    Temperature,
    /// Practical salinity.
    Salinity,
}

impl Variable {
    /// Short name used in output naming.
    pub fn short_name(&self) -> &'static str {
        match self {
            Variable::Temperature => "temp",
            Variable::Salinity => "salt",
        }
    }
}

impl FromStr for Variable {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temp" | "temperature" => Ok(Variable::Temperature),
            "salt" | "salinity" => Ok(Variable::Salinity),
            _ => Err(GeoError::UnknownVariable(s.to_string())),
        }
    }
}

/// Names of the depth/latitude/longitude coordinates in a model's files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoordinateNames {
    pub depth: &'static str,
    pub lat: &'static str,
    pub lon: &'static str,
}

/// Ocean model or reanalysis product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelSource {
    /// HYCOM Global Ocean Forecast System 3.1.
    Gofs,
    /// Real-Time Ocean Forecast System.
    Rtofs,
    /// RTOFS with data assimilation.
    RtofsDa,
    /// Copernicus Marine global analysis/forecast.
    Cmems,
}

impl ModelSource {
    /// All supported sources.
    pub fn all() -> &'static [ModelSource] {
        &[
            ModelSource::Gofs,
            ModelSource::Rtofs,
            ModelSource::RtofsDa,
            ModelSource::Cmems,
        ]
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ModelSource::Gofs => "GOFS",
            ModelSource::Rtofs => "RTOFS",
            ModelSource::RtofsDa => "RTOFS-DA",
            ModelSource::Cmems => "CMEMS",
        }
    }

    /// Longitude convention of the model's horizontal grid.
    pub fn lon_convention(&self) -> LonConvention {
        match self {
            ModelSource::Gofs => LonConvention::Positive360,
            _ => LonConvention::Signed180,
        }
    }

    /// Name of a variable in the model's files.
    pub fn variable_name(&self, variable: Variable) -> &'static str {
        match (self, variable) {
            (ModelSource::Gofs, Variable::Temperature) => "water_temp",
            (ModelSource::Rtofs | ModelSource::RtofsDa, Variable::Temperature) => "temperature",
            (ModelSource::Cmems, Variable::Temperature) => "thetao",
            (ModelSource::Cmems, Variable::Salinity) => "so",
            (_, Variable::Salinity) => "salinity",
        }
    }

    /// Coordinate variable names.
    pub fn coordinate_names(&self) -> CoordinateNames {
        match self {
            ModelSource::Rtofs | ModelSource::RtofsDa => CoordinateNames {
                depth: "Depth",
                lat: "Latitude",
                lon: "Longitude",
            },
            ModelSource::Gofs => CoordinateNames {
                depth: "depth",
                lat: "lat",
                lon: "lon",
            },
            ModelSource::Cmems => CoordinateNames {
                depth: "depth",
                lat: "latitude",
                lon: "longitude",
            },
        }
    }
}

impl FromStr for ModelSource {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['-', '_'], "").as_str() {
            "GOFS" => Ok(ModelSource::Gofs),
            "RTOFS" => Ok(ModelSource::Rtofs),
            "RTOFSDA" => Ok(ModelSource::RtofsDa),
            "CMEMS" => Ok(ModelSource::Cmems),
            _ => Err(GeoError::UnknownModel(s.to_string())),
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_source() {
        assert_eq!("GOFS".parse::<ModelSource>().unwrap(), ModelSource::Gofs);
        assert_eq!("rtofs".parse::<ModelSource>().unwrap(), ModelSource::Rtofs);
        assert_eq!("RTOFS-DA".parse::<ModelSource>().unwrap(), ModelSource::RtofsDa);
        assert_eq!("RTOFSDA".parse::<ModelSource>().unwrap(), ModelSource::RtofsDa);
        assert!("HRRR".parse::<ModelSource>().is_err());
    }

    #[test]
    fn test_variable_names() {
        assert_eq!(
            ModelSource::Gofs.variable_name(Variable::Temperature),
            "water_temp"
        );
        assert_eq!(
            ModelSource::RtofsDa.variable_name(Variable::Temperature),
            "temperature"
        );
        assert_eq!(ModelSource::Cmems.variable_name(Variable::Salinity), "so");
        assert_eq!(ModelSource::Gofs.variable_name(Variable::Salinity), "salinity");
    }

    #[test]
    fn test_only_gofs_uses_360() {
        for source in ModelSource::all() {
            let expected = if *source == ModelSource::Gofs {
                LonConvention::Positive360
            } else {
                LonConvention::Signed180
            };
            assert_eq!(source.lon_convention(), expected, "{}", source);
        }
    }

    #[test]
    fn test_rtofs_coordinates() {
        let names = ModelSource::Rtofs.coordinate_names();
        assert_eq!(names.depth, "Depth");
        assert_eq!(names.lon, "Longitude");
    }
}
