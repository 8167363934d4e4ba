//! Vertical sections sampled from a model cube along a transect.

use ocean_common::{rounded_index, to_signed_180};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::OhcConfig;
use crate::cube::FieldCube;
use crate::error::{AnalysisError, Result};
use crate::ohc::integrate_warm_layer;
use crate::transect::Transect;

/// A depth-by-distance slice through a model field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub variable: String,
    pub depth: Vec<f64>,
    /// Longitude of the grid column used for each point, signed convention.
    pub lon: Vec<f64>,
    /// Latitude of the grid column used for each point.
    pub lat: Vec<f64>,
    /// Row-major `[depth][point]` values.
    pub values: Vec<f64>,
}

impl Section {
    /// Number of sampled positions along the transect.
    pub fn n_points(&self) -> usize {
        self.lon.len()
    }

    /// Value at (depth index, point index).
    pub fn value(&self, k: usize, p: usize) -> Option<f64> {
        if k >= self.depth.len() || p >= self.n_points() {
            return None;
        }
        Some(self.values[k * self.n_points() + p])
    }

    /// Water column at a point, surface first.
    pub fn column(&self, p: usize) -> Option<Vec<f64>> {
        if p >= self.n_points() {
            return None;
        }
        let n = self.n_points();
        Some((0..self.depth.len()).map(|k| self.values[k * n + p]).collect())
    }

    /// Heat content of every column along the section, treating the values
    /// as temperature.
    pub fn ohc_along(&self, config: &OhcConfig) -> Vec<Option<f64>> {
        (0..self.n_points())
            .map(|p| {
                self.column(p)
                    .and_then(|column| integrate_warm_layer(&column, &self.depth, config))
            })
            .collect()
    }
}

/// Sample `cube` along `transect`.
///
/// Each transect point is snapped to a grid column by interpolating its
/// fractional index on the longitude and latitude axes and rounding. The
/// transect is given in signed longitudes and converted to the cube's
/// convention first.
pub fn sample_section(cube: &FieldCube, transect: &Transect) -> Result<Section> {
    if transect.is_empty() {
        return Err(AnalysisError::empty_selection("transect has no points"));
    }

    let convention = cube.lon_convention();
    let (nd, _, _) = cube.dims();
    let n = transect.len();

    let mut columns = Vec::with_capacity(n);
    for (p, point) in transect.points.iter().enumerate() {
        let i = rounded_index(cube.lon(), convention.convert(point.lon));
        let j = rounded_index(cube.lat(), point.lat);
        match (j, i) {
            (Some(j), Some(i)) => columns.push((j, i)),
            _ => {
                return Err(AnalysisError::invalid_track(format!(
                    "transect point {} is not a valid position: {:?}",
                    p, point
                )))
            }
        }
    }

    let mut values = vec![f64::NAN; nd * n];
    for (p, &(j, i)) in columns.iter().enumerate() {
        for k in 0..nd {
            if let Some(v) = cube.value(k, j, i) {
                values[k * n + p] = v;
            }
        }
    }

    debug!(
        variable = cube.variable(),
        points = n,
        levels = nd,
        "Sampled vertical section"
    );

    Ok(Section {
        variable: cube.variable().to_string(),
        depth: cube.depth().to_vec(),
        lon: columns
            .iter()
            .map(|&(_, i)| to_signed_180(cube.lon()[i]))
            .collect(),
        lat: columns.iter().map(|&(j, _)| cube.lat()[j]).collect(),
        values,
    })
}
