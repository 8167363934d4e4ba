//! Ocean heat content above the 26 degree C isotherm.
//!
//! For a temperature profile `T(z)` the heat content is
//!
//! ```text
//! OHC = cp * rho0 * integral( T(z) - 26 ) dz * 1e-7      [kJ/cm^2]
//! ```
//!
//! taken over the samples with `T >= 26` by the trapezoidal rule. The result
//! is only defined for a warm layer connected to the surface: when the
//! shallowest warm sample is deeper than 10 m, or there is no warm sample at
//! all, the value is missing (`None`), which is different from a zero heat
//! content. A warm layer of a single sample has no thickness and integrates
//! to `Some(0.0)`.
//!
//! The gridded form evaluates the same rule on every water column, so a grid
//! cell always agrees with [`ohc_profile`] on that column.

use ocean_common::LonConvention;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::OhcConfig;
use crate::cube::FieldCube;
use crate::error::{AnalysisError, Result};

/// Heat content of one profile with the default constants.
///
/// # Errors
/// [`AnalysisError::ShapeMismatch`] if the arrays differ in length.
pub fn ohc_profile(temperatures: &[f64], depths: &[f64]) -> Result<Option<f64>> {
    ohc_profile_with_config(temperatures, depths, &OhcConfig::default())
}

/// Heat content of one profile with explicit constants.
pub fn ohc_profile_with_config(
    temperatures: &[f64],
    depths: &[f64],
    config: &OhcConfig,
) -> Result<Option<f64>> {
    if temperatures.len() != depths.len() {
        return Err(AnalysisError::shape_mismatch(
            "profile temperatures",
            depths.len(),
            temperatures.len(),
        ));
    }
    Ok(integrate_warm_layer(temperatures, depths, config))
}

/// Heat content of every column of a `[depth][lat][lon]` temperature array.
///
/// The horizontal axes only label the output; they may run in any order.
///
/// # Errors
/// [`AnalysisError::ShapeMismatch`] if the array length is not
/// `depth * lat * lon`.
pub fn ohc_grid(
    temperature_cube: &[f64],
    depth: &[f64],
    lat: &[f64],
    lon: &[f64],
) -> Result<OhcField> {
    ohc_grid_with_config(temperature_cube, depth, lat, lon, &OhcConfig::default())
}

/// Gridded heat content with explicit constants.
pub fn ohc_grid_with_config(
    temperature_cube: &[f64],
    depth: &[f64],
    lat: &[f64],
    lon: &[f64],
    config: &OhcConfig,
) -> Result<OhcField> {
    let expected = depth.len() * lat.len() * lon.len();
    if temperature_cube.len() != expected {
        return Err(AnalysisError::shape_mismatch(
            "temperature cube",
            expected,
            temperature_cube.len(),
        ));
    }
    Ok(integrate_columns(temperature_cube, depth, lat, lon, config))
}

/// Heat content of every column of a temperature cube.
pub fn ohc_field(cube: &FieldCube, config: &OhcConfig) -> OhcField {
    integrate_columns(cube.values(), cube.depth(), cube.lat(), cube.lon(), config)
}

/// Per-column integration over a row-major `[depth][lat][lon]` array whose
/// length has already been checked.
fn integrate_columns(
    values: &[f64],
    depth: &[f64],
    lat: &[f64],
    lon: &[f64],
    config: &OhcConfig,
) -> OhcField {
    let (ny, nx) = (lat.len(), lon.len());
    let plane = ny * nx;
    let mut column = vec![0.0; depth.len()];
    let mut cells = Vec::with_capacity(plane);

    for cell in 0..plane {
        for (k, slot) in column.iter_mut().enumerate() {
            *slot = values[k * plane + cell];
        }
        cells.push(integrate_warm_layer(&column, depth, config));
    }

    let field = OhcField {
        lat: lat.to_vec(),
        lon: lon.to_vec(),
        values: cells,
    };

    debug!(
        rows = ny,
        cols = nx,
        valid = field.valid_count(),
        "Computed ocean heat content field"
    );

    field
}

/// Apply the warm-layer policy to paired temperature/depth samples of equal
/// length.
pub(crate) fn integrate_warm_layer(
    temperatures: &[f64],
    depths: &[f64],
    config: &OhcConfig,
) -> Option<f64> {
    let warm: Vec<(f64, f64)> = depths
        .iter()
        .zip(temperatures)
        .filter(|&(_, &t)| t >= config.isotherm_c)
        .map(|(&z, &t)| (z, t - config.isotherm_c))
        .collect();

    if warm.is_empty() {
        return None;
    }

    let top = warm.iter().map(|(z, _)| *z).fold(f64::INFINITY, f64::min);
    if top > config.surface_depth_limit_m {
        return None;
    }

    Some(config.scale() * trapezoid(&warm))
}

/// Trapezoidal integral of (x, y) samples in the given order. Fewer than two
/// samples integrate to zero.
pub fn trapezoid(samples: &[(f64, f64)]) -> f64 {
    samples
        .windows(2)
        .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
        .sum()
}

/// Gridded heat content, `None` where a column has no surface warm layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhcField {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    /// Row-major `[lat][lon]` values in kJ/cm^2.
    pub values: Vec<Option<f64>>,
}

impl OhcField {
    /// Value at (lat index, lon index); the outer `None` means out of range.
    pub fn get(&self, j: usize, i: usize) -> Option<Option<f64>> {
        if j >= self.lat.len() || i >= self.lon.len() {
            return None;
        }
        Some(self.values[j * self.lon.len() + i])
    }

    /// Number of cells with a value.
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Largest heat content in the field.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().flatten().copied().reduce(f64::max)
    }

    /// Same field with longitudes expressed in `convention`.
    pub fn with_lon_convention(mut self, convention: LonConvention) -> Self {
        self.lon = convention.convert_all(&self.lon);
        self
    }
}
