//! Three-dimensional model fields on a regular lat/lon grid.

use ocean_common::{nearest_index, to_signed_180, BoundingBox, LonConvention, Region};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::profile::VerticalProfile;

/// A model variable indexed `[depth][lat][lon]`, stored row-major.
///
/// Latitude and longitude axes are strictly increasing; depth is
/// non-decreasing and positive down. The longitude axis keeps the model's
/// own convention (0-360 for GOFS, signed for RTOFS and CMEMS).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCube {
    variable: String,
    depth: Vec<f64>,
    lat: Vec<f64>,
    lon: Vec<f64>,
    values: Vec<f64>,
}

impl FieldCube {
    /// Create a cube, validating axes and the length of `values`.
    pub fn new(
        variable: impl Into<String>,
        depth: Vec<f64>,
        lat: Vec<f64>,
        lon: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self> {
        check_axis("depth", &depth, false)?;
        check_axis("lat", &lat, true)?;
        check_axis("lon", &lon, true)?;

        let expected = depth.len() * lat.len() * lon.len();
        if values.len() != expected {
            return Err(AnalysisError::shape_mismatch(
                "cube values",
                expected,
                values.len(),
            ));
        }

        Ok(Self {
            variable: variable.into(),
            depth,
            lat,
            lon,
            values,
        })
    }

    /// Build a cube by evaluating `f(depth_index, lat_index, lon_index)`.
    pub fn from_fn(
        variable: impl Into<String>,
        depth: Vec<f64>,
        lat: Vec<f64>,
        lon: Vec<f64>,
        mut f: impl FnMut(usize, usize, usize) -> f64,
    ) -> Result<Self> {
        let mut values = Vec::with_capacity(depth.len() * lat.len() * lon.len());
        for k in 0..depth.len() {
            for j in 0..lat.len() {
                for i in 0..lon.len() {
                    values.push(f(k, j, i));
                }
            }
        }
        Self::new(variable, depth, lat, lon, values)
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn lat(&self) -> &[f64] {
        &self.lat
    }

    pub fn lon(&self) -> &[f64] {
        &self.lon
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Dimensions as (depth, lat, lon).
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.depth.len(), self.lat.len(), self.lon.len())
    }

    /// Longitude convention of the horizontal grid.
    pub fn lon_convention(&self) -> LonConvention {
        LonConvention::detect(&self.lon)
    }

    #[inline]
    fn flat_index(&self, k: usize, j: usize, i: usize) -> usize {
        (k * self.lat.len() + j) * self.lon.len() + i
    }

    /// Value at (depth index, lat index, lon index).
    pub fn value(&self, k: usize, j: usize, i: usize) -> Option<f64> {
        let (nd, ny, nx) = self.dims();
        if k >= nd || j >= ny || i >= nx {
            return None;
        }
        Some(self.values[self.flat_index(k, j, i)])
    }

    /// Vertical column at (lat index, lon index), surface first.
    pub fn column(&self, j: usize, i: usize) -> Option<Vec<f64>> {
        let (nd, ny, nx) = self.dims();
        if j >= ny || i >= nx {
            return None;
        }
        Some((0..nd).map(|k| self.values[self.flat_index(k, j, i)]).collect())
    }

    /// Profile at the grid column nearest to a signed-convention position.
    pub fn nearest_profile(&self, lon: f64, lat: f64) -> Result<VerticalProfile> {
        let target_lon = self.lon_convention().convert(lon);
        let i = nearest_index(&self.lon, target_lon).ok_or_else(|| {
            AnalysisError::empty_selection(format!("no longitude near {}", lon))
        })?;
        let j = nearest_index(&self.lat, lat).ok_or_else(|| {
            AnalysisError::empty_selection(format!("no latitude near {}", lat))
        })?;

        let column = self
            .column(j, i)
            .ok_or_else(|| AnalysisError::empty_selection("column out of range"))?;
        VerticalProfile::new(self.depth.clone(), column)
    }

    /// Keep only depth levels in `[0, max_depth]`.
    pub fn truncate_depth(&self, max_depth: f64) -> Result<FieldCube> {
        let levels: Vec<usize> = (0..self.depth.len())
            .filter(|&k| self.depth[k] >= 0.0 && self.depth[k] <= max_depth)
            .collect();
        if levels.is_empty() {
            return Err(AnalysisError::empty_selection(format!(
                "no depth levels within 0..{} m",
                max_depth
            )));
        }

        let plane = self.lat.len() * self.lon.len();
        let mut values = Vec::with_capacity(levels.len() * plane);
        for &k in &levels {
            let start = k * plane;
            values.extend_from_slice(&self.values[start..start + plane]);
        }

        FieldCube::new(
            self.variable.clone(),
            levels.iter().map(|&k| self.depth[k]).collect(),
            self.lat.clone(),
            self.lon.clone(),
            values,
        )
    }

    /// Restrict the horizontal grid to cells strictly inside `bbox`.
    pub fn subset(&self, bbox: &BoundingBox) -> Result<FieldCube> {
        let (rows, cols) = self.bbox_indices(bbox)?;
        let (nd, _, _) = self.dims();

        let mut values = Vec::with_capacity(nd * rows.len() * cols.len());
        for k in 0..nd {
            for &j in &rows {
                for &i in &cols {
                    values.push(self.values[self.flat_index(k, j, i)]);
                }
            }
        }

        FieldCube::new(
            self.variable.clone(),
            self.depth.clone(),
            rows.iter().map(|&j| self.lat[j]).collect(),
            cols.iter().map(|&i| self.lon[i]).collect(),
            values,
        )
    }

    /// Restrict to a named study region such as `"GoMex"`.
    pub fn subset_region(&self, name: &str) -> Result<FieldCube> {
        let region: Region = name.parse()?;
        self.subset(&region.bbox())
    }

    /// Horizontal slice at the depth level nearest to `depth`, restricted to
    /// cells strictly inside `bbox`.
    pub fn surface(&self, depth: f64, bbox: &BoundingBox) -> Result<SurfaceField> {
        let k = nearest_index(&self.depth, depth).ok_or_else(|| {
            AnalysisError::empty_selection(format!("no depth level near {}", depth))
        })?;
        let (rows, cols) = self.bbox_indices(bbox)?;

        let mut values = Vec::with_capacity(rows.len() * cols.len());
        for &j in &rows {
            for &i in &cols {
                values.push(self.values[self.flat_index(k, j, i)]);
            }
        }

        Ok(SurfaceField {
            variable: self.variable.clone(),
            depth: self.depth[k],
            lat: rows.iter().map(|&j| self.lat[j]).collect(),
            lon: cols.iter().map(|&i| to_signed_180(self.lon[i])).collect(),
            values,
        })
    }

    /// Row and column indices inside `bbox`, comparing in signed longitudes.
    fn bbox_indices(&self, bbox: &BoundingBox) -> Result<(Vec<usize>, Vec<usize>)> {
        let signed_lon: Vec<f64> = self.lon.iter().map(|&lon| to_signed_180(lon)).collect();
        let (lon_mask, lat_mask) = bbox.mask_axes(&signed_lon, &self.lat);
        let rows = selected(&lat_mask);
        let cols = selected(&lon_mask);

        if rows.is_empty() || cols.is_empty() {
            return Err(AnalysisError::empty_selection(format!(
                "no {} grid cells inside {}",
                self.variable, bbox
            )));
        }

        Ok((rows, cols))
    }
}

/// A horizontal slice of a [`FieldCube`], longitudes in signed convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceField {
    pub variable: String,
    /// Depth of the selected level, meters.
    pub depth: f64,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    /// Row-major `[lat][lon]` values.
    pub values: Vec<f64>,
}

impl SurfaceField {
    pub fn value(&self, j: usize, i: usize) -> Option<f64> {
        if j >= self.lat.len() || i >= self.lon.len() {
            return None;
        }
        Some(self.values[j * self.lon.len() + i])
    }
}

fn selected(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i))
        .collect()
}

fn check_axis(name: &str, axis: &[f64], strict: bool) -> Result<()> {
    if axis.is_empty() {
        return Err(AnalysisError::invalid_axis(name, "axis is empty"));
    }
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(AnalysisError::invalid_axis(name, "axis has non-finite values"));
    }
    let ordered = axis
        .windows(2)
        .all(|w| if strict { w[1] > w[0] } else { w[1] >= w[0] });
    if !ordered {
        return Err(AnalysisError::invalid_axis(
            name,
            if strict {
                "axis must be strictly increasing"
            } else {
                "axis must be non-decreasing"
            },
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> FieldCube {
        // value = 100k + 10j + i
        FieldCube::from_fn(
            "temperature",
            vec![0.0, 10.0, 20.0],
            vec![24.0, 25.0, 26.0],
            vec![268.0, 269.0, 270.0, 271.0],
            |k, j, i| (100 * k + 10 * j + i) as f64,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = FieldCube::new("t", vec![0.0], vec![1.0], vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::ShapeMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn test_new_rejects_decreasing_lat() {
        let err = FieldCube::new("t", vec![0.0], vec![2.0, 1.0], vec![1.0], vec![0.0, 0.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidAxis { .. }));
    }

    #[test]
    fn test_value_and_column() {
        let cube = cube();
        assert_eq!(cube.dims(), (3, 3, 4));
        assert_eq!(cube.value(2, 1, 3), Some(213.0));
        assert_eq!(cube.value(3, 0, 0), None);
        assert_eq!(cube.column(1, 2).unwrap(), vec![12.0, 112.0, 212.0]);
    }

    #[test]
    fn test_nearest_profile_converts_longitude() {
        let cube = cube();
        assert_eq!(cube.lon_convention(), LonConvention::Positive360);
        // -90.8 -> 269.2, nearest column is 269.0 (index 1)
        let profile = cube.nearest_profile(-90.8, 25.2).unwrap();
        assert_eq!(profile.values(), &[11.0, 111.0, 211.0]);
        assert_eq!(profile.depth(), &[0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_surface_reports_signed_longitudes() {
        let cube = cube();
        let bbox = BoundingBox::new(-92.5, 23.0, -89.5, 25.5);
        let surface = cube.surface(9.0, &bbox).unwrap();

        assert_eq!(surface.depth, 10.0);
        assert_eq!(surface.lat, vec![24.0, 25.0]);
        assert_eq!(surface.lon, vec![-92.0, -91.0, -90.0]);
        assert_eq!(surface.value(1, 2), Some(112.0));
    }

    #[test]
    fn test_subset_outside_grid() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let err = cube().subset(&bbox).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptySelection(_)));
    }

    #[test]
    fn test_subset_region() {
        let gulf = cube().subset_region("GoMex").unwrap();
        assert_eq!(gulf.dims(), cube().dims());

        let err = cube().subset_region("Atlantis").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Geo(ocean_common::GeoError::UnknownRegion(_))
        ));
        assert_eq!(err.to_string(), "Unknown region: Atlantis");
    }

    #[test]
    fn test_truncate_depth() {
        let shallow = cube().truncate_depth(10.0).unwrap();
        assert_eq!(shallow.depth(), &[0.0, 10.0]);
        assert_eq!(shallow.value(1, 2, 3), Some(123.0));
        assert!(cube().truncate_depth(-1.0).is_err());
    }
}
