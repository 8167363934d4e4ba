//! Physical constants and tunables for heat-content integration and track
//! densification.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AnalysisError, Result};

/// Specific heat capacity of sea water, J/(kg K).
pub const SEAWATER_HEAT_CAPACITY: f64 = 3985.0;

/// Reference sea water density, kg/m^3.
pub const REFERENCE_DENSITY: f64 = 1025.0;

/// Isotherm bounding the warm layer, degrees C.
pub const ISOTHERM_26C: f64 = 26.0;

/// Deepest allowed top of the warm layer, meters.
pub const SURFACE_DEPTH_LIMIT_M: f64 = 10.0;

/// Converts J/m^2 to kJ/cm^2.
pub const J_PER_M2_TO_KJ_PER_CM2: f64 = 1e-7;

/// Default longitude spacing of densified transects, degrees.
pub const DEFAULT_TRANSECT_STEP_DEGREES: f64 = 0.1;

/// Smallest accepted transect spacing, degrees (about 11 m).
pub const MIN_TRANSECT_STEP_DEGREES: f64 = 1e-4;

/// Parameters of the ocean heat content integral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OhcConfig {
    /// Specific heat capacity, J/(kg K).
    pub heat_capacity: f64,

    /// Sea water density, kg/m^3.
    pub density: f64,

    /// Temperature of the isotherm bounding the warm layer, degrees C.
    pub isotherm_c: f64,

    /// The shallowest warm sample must be at or above this depth (m) for the
    /// layer to count as surface-connected.
    pub surface_depth_limit_m: f64,

    /// Factor applied to the J/m^2 integral.
    pub unit_scale: f64,
}

impl Default for OhcConfig {
    fn default() -> Self {
        Self {
            heat_capacity: SEAWATER_HEAT_CAPACITY,
            density: REFERENCE_DENSITY,
            isotherm_c: ISOTHERM_26C,
            surface_depth_limit_m: SURFACE_DEPTH_LIMIT_M,
            unit_scale: J_PER_M2_TO_KJ_PER_CM2,
        }
    }
}

impl OhcConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(val) = env_f64("OHC_HEAT_CAPACITY") {
            config.heat_capacity = val;
        }

        if let Some(val) = env_f64("OHC_DENSITY") {
            config.density = val;
        }

        if let Some(val) = env_f64("OHC_ISOTHERM_C") {
            config.isotherm_c = val;
        }

        if let Some(val) = env_f64("OHC_SURFACE_DEPTH_M") {
            config.surface_depth_limit_m = val;
        }

        if let Some(val) = env_f64("OHC_UNIT_SCALE") {
            config.unit_scale = val;
        }

        config
    }

    /// Parse and validate a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate().map_err(AnalysisError::ConfigError)?;
        Ok(config)
    }

    /// Read and validate a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(self.heat_capacity.is_finite() && self.heat_capacity > 0.0) {
            return Err("heat_capacity must be > 0".to_string());
        }

        if !(self.density.is_finite() && self.density > 0.0) {
            return Err("density must be > 0".to_string());
        }

        if !self.isotherm_c.is_finite() {
            return Err("isotherm_c must be finite".to_string());
        }

        if !(self.surface_depth_limit_m.is_finite() && self.surface_depth_limit_m >= 0.0) {
            return Err("surface_depth_limit_m must be >= 0".to_string());
        }

        if !(self.unit_scale.is_finite() && self.unit_scale > 0.0) {
            return Err("unit_scale must be > 0".to_string());
        }

        Ok(())
    }

    /// Combined factor `cp * rho0 * unit_scale` applied to the integral of
    /// the temperature excess over depth.
    pub fn scale(&self) -> f64 {
        self.heat_capacity * self.density * self.unit_scale
    }
}

/// Parameters of the transect builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransectConfig {
    /// Longitude spacing of interpolated samples, degrees.
    pub step_degrees: f64,
}

impl Default for TransectConfig {
    fn default() -> Self {
        Self {
            step_degrees: DEFAULT_TRANSECT_STEP_DEGREES,
        }
    }
}

impl TransectConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(val) = env_f64("TRANSECT_STEP_DEGREES") {
            config.step_degrees = val;
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(self.step_degrees.is_finite() && self.step_degrees >= MIN_TRANSECT_STEP_DEGREES) {
            return Err(format!(
                "step_degrees must be at least {}, got {}",
                MIN_TRANSECT_STEP_DEGREES, self.step_degrees
            ));
        }
        Ok(())
    }
}

fn env_f64(name: &str) -> Option<f64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<f64>() {
        Ok(val) => Some(val),
        Err(_) => {
            warn!(var = name, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}
