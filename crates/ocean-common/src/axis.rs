//! Lookups on 1D coordinate axes and 2D curvilinear coordinate grids.
//!
//! Model grids are addressed by index, observations by coordinate. These
//! helpers translate between the two with plain linear scans.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::error::{GeoError, GeoResult};

/// Index of the axis value closest to `target` (minimum absolute difference).
///
/// The first minimum wins on ties. NaN axis values are skipped. Returns
/// `None` for an empty axis, an all-NaN axis or a NaN target.
pub fn nearest_index(axis: &[f64], target: f64) -> Option<usize> {
    if target.is_nan() {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, &value) in axis.iter().enumerate() {
        let distance = (value - target).abs();
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((i, distance)),
        }
    }

    best.map(|(i, _)| i)
}

/// Fractional position of `target` along a monotonically increasing axis.
///
/// Linearly interpolates between neighbouring indices and clamps to the
/// first/last index outside the axis range.
pub fn fractional_index(axis: &[f64], target: f64) -> Option<f64> {
    if axis.is_empty() || target.is_nan() {
        return None;
    }

    let last = axis.len() - 1;
    if target <= axis[0] {
        return Some(0.0);
    }
    if target >= axis[last] {
        return Some(last as f64);
    }

    // axis[k] <= target < axis[k + 1]
    let k = axis.partition_point(|&v| v <= target) - 1;
    let span = axis[k + 1] - axis[k];
    if span <= 0.0 {
        return Some(k as f64);
    }

    Some(k as f64 + (target - axis[k]) / span)
}

/// Grid index obtained by rounding [`fractional_index`] half-to-even.
pub fn rounded_index(axis: &[f64], target: f64) -> Option<usize> {
    fractional_index(axis, target).map(|f| f.round_ties_even() as usize)
}

/// Mask of axis values strictly between `min` and `max`.
pub fn axis_mask(axis: &[f64], min: f64, max: f64) -> Vec<bool> {
    axis.iter().map(|&v| v > min && v < max).collect()
}

/// Half-open range spanning the first to last `true` entry of a mask.
pub fn masked_range(mask: &[bool]) -> Option<Range<usize>> {
    let first = mask.iter().position(|&m| m)?;
    let last = mask.iter().rposition(|&m| m)?;
    Some(first..last + 1)
}

/// Rectangular block of a curvilinear grid, in row/column index space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerSubset {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl CornerSubset {
    /// Number of rows in the block.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the block.
    pub fn width(&self) -> usize {
        self.cols.len()
    }
}

/// Smallest index block covering every cell of a 2D coordinate grid whose
/// position is strictly inside `bbox`.
///
/// `lon` and `lat` are row-major `ny * nx` arrays. The block runs from the
/// minimum to the maximum row/column of any matching cell, so it can contain
/// cells outside the box on skewed grids.
pub fn curvilinear_subset(
    lon: &[f64],
    lat: &[f64],
    ny: usize,
    nx: usize,
    bbox: &BoundingBox,
) -> GeoResult<Option<CornerSubset>> {
    let expected = ny * nx;
    if lon.len() != expected {
        return Err(GeoError::ShapeMismatch {
            expected,
            actual: lon.len(),
        });
    }
    if lat.len() != expected {
        return Err(GeoError::ShapeMismatch {
            expected,
            actual: lat.len(),
        });
    }

    let mut rows: Option<(usize, usize)> = None;
    let mut cols: Option<(usize, usize)> = None;

    for row in 0..ny {
        for col in 0..nx {
            let idx = row * nx + col;
            if !bbox.contains_strict(lon[idx], lat[idx]) {
                continue;
            }
            rows = Some(match rows {
                Some((lo, hi)) => (lo.min(row), hi.max(row)),
                None => (row, row),
            });
            cols = Some(match cols {
                Some((lo, hi)) => (lo.min(col), hi.max(col)),
                None => (col, col),
            });
        }
    }

    Ok(match (rows, cols) {
        (Some((r0, r1)), Some((c0, c1))) => Some(CornerSubset {
            rows: r0..r1 + 1,
            cols: c0..c1 + 1,
        }),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_index() {
        let axis = [18.0, 18.04, 18.08, 18.12];
        assert_eq!(nearest_index(&axis, 18.05), Some(1));
        assert_eq!(nearest_index(&axis, 10.0), Some(0));
        assert_eq!(nearest_index(&axis, 99.0), Some(3));
    }

    #[test]
    fn test_nearest_index_first_tie_wins() {
        let axis = [0.0, 1.0, 2.0];
        assert_eq!(nearest_index(&axis, 0.5), Some(0));
    }

    #[test]
    fn test_nearest_index_skips_nan() {
        let axis = [f64::NAN, 5.0, 10.0];
        assert_eq!(nearest_index(&axis, 0.0), Some(1));
        assert_eq!(nearest_index(&[f64::NAN], 0.0), None);
        assert_eq!(nearest_index(&[], 0.0), None);
        assert_eq!(nearest_index(&axis, f64::NAN), None);
    }

    #[test]
    fn test_fractional_index() {
        let axis = [0.0, 10.0, 20.0, 40.0];
        assert_eq!(fractional_index(&axis, 5.0), Some(0.5));
        assert_eq!(fractional_index(&axis, 30.0), Some(2.5));
        assert_eq!(fractional_index(&axis, 20.0), Some(2.0));
        assert_eq!(fractional_index(&axis, -5.0), Some(0.0));
        assert_eq!(fractional_index(&axis, 100.0), Some(3.0));
        assert_eq!(fractional_index(&[7.0], 3.0), Some(0.0));
        assert_eq!(fractional_index(&[], 3.0), None);
    }

    #[test]
    fn test_rounded_index_ties_to_even() {
        let axis = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(rounded_index(&axis, 0.5), Some(0));
        assert_eq!(rounded_index(&axis, 1.5), Some(2));
        assert_eq!(rounded_index(&axis, 1.6), Some(2));
    }

    #[test]
    fn test_axis_mask_is_strict() {
        let axis = [-101.0, -100.0, -90.0, -80.0, -79.0];
        assert_eq!(
            axis_mask(&axis, -100.0, -80.0),
            vec![false, false, true, false, false]
        );
    }

    #[test]
    fn test_masked_range() {
        assert_eq!(masked_range(&[false, true, false, true, false]), Some(1..4));
        assert_eq!(masked_range(&[false, false]), None);
    }

    #[test]
    fn test_curvilinear_subset() {
        // 3 x 3 grid, lon varies along columns, lat along rows
        let lon = [-95.0, -90.0, -85.0, -95.0, -90.0, -85.0, -95.0, -90.0, -85.0];
        let lat = [20.0, 20.0, 20.0, 25.0, 25.0, 25.0, 30.0, 30.0, 30.0];
        let bbox = BoundingBox::new(-92.0, 22.0, -80.0, 32.0);

        let subset = curvilinear_subset(&lon, &lat, 3, 3, &bbox).unwrap().unwrap();
        assert_eq!(subset.rows, 1..3);
        assert_eq!(subset.cols, 1..3);
        assert_eq!(subset.height(), 2);
        assert_eq!(subset.width(), 2);
    }

    #[test]
    fn test_curvilinear_subset_outside() {
        let lon = [0.0, 1.0];
        let lat = [0.0, 0.0];
        let bbox = BoundingBox::new(-92.0, 22.0, -80.0, 32.0);
        assert_eq!(curvilinear_subset(&lon, &lat, 1, 2, &bbox).unwrap(), None);
    }

    #[test]
    fn test_curvilinear_subset_shape_mismatch() {
        let bbox = BoundingBox::new(-92.0, 22.0, -80.0, 32.0);
        let result = curvilinear_subset(&[0.0], &[0.0, 1.0], 1, 2, &bbox);
        assert!(matches!(result, Err(GeoError::ShapeMismatch { .. })));
    }
}
