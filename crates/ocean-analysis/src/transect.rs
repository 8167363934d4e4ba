//! Densification of storm tracks into transects.
//!
//! A track is a short list of fixes several degrees apart. Sampling a model
//! along it needs points roughly one grid cell apart, so each segment is
//! filled in by linear interpolation at a fixed longitude step.
//!
//! Output layout for vertices `v0, v1, .., vn`:
//!
//! ```text
//! [ v1 ] [ segment v0->v1 ] [ segment v1->v2 ] ... [ segment vn-1->vn ]
//!   ^        ^                                            ^
//!   anchor   starts one step short of v0          ends at vn
//! ```
//!
//! Each segment is generated from its later vertex toward its earlier vertex
//! on a half-open range (the earlier vertex itself is never emitted), then
//! reversed so the samples walk along the track. The output always begins
//! with the exact coordinates of the second vertex.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TransectConfig;
use crate::error::{AnalysisError, Result};

/// Fraction of a step within which a sample counts as landing on the
/// earlier vertex, absorbing rounding in `run / step`.
const ENDPOINT_TOLERANCE: f64 = 1e-9;

/// A (longitude, latitude) position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub lon: f64,
    pub lat: f64,
}

impl TrackPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

/// An ordered, densified path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transect {
    pub points: Vec<TrackPoint>,
}

impl Transect {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn lons(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lon).collect()
    }

    pub fn lats(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lat).collect()
    }

    /// Split into separate longitude and latitude columns.
    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>) {
        self.points.into_iter().map(|p| (p.lon, p.lat)).unzip()
    }
}

/// Densify a track given as parallel longitude/latitude arrays, using the
/// default 0.1 degree step.
///
/// # Errors
/// - [`AnalysisError::InvalidTrack`] if the arrays differ in length, hold
///   fewer than two vertices, or contain non-finite values.
/// - [`AnalysisError::DegenerateSegment`] if two consecutive vertices share
///   a longitude.
pub fn build_transect(lons: &[f64], lats: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if lons.len() != lats.len() {
        return Err(AnalysisError::invalid_track(format!(
            "{} longitudes but {} latitudes",
            lons.len(),
            lats.len()
        )));
    }

    let vertices: Vec<TrackPoint> = lons
        .iter()
        .zip(lats)
        .map(|(&lon, &lat)| TrackPoint::new(lon, lat))
        .collect();

    Ok(densify(&vertices, &TransectConfig::default())?.into_columns())
}

/// Densify a track of vertices with the given step.
pub fn densify(vertices: &[TrackPoint], config: &TransectConfig) -> Result<Transect> {
    config.validate().map_err(AnalysisError::ConfigError)?;

    if vertices.len() < 2 {
        return Err(AnalysisError::invalid_track(format!(
            "need at least 2 vertices, got {}",
            vertices.len()
        )));
    }

    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(AnalysisError::invalid_track(format!(
            "vertex {} is not finite: {:?}",
            index, vertices[index]
        )));
    }

    let mut points = vec![vertices[1]];
    for (i, pair) in vertices.windows(2).enumerate() {
        points.extend(segment_samples(i + 1, pair[0], pair[1], config.step_degrees)?);
    }

    debug!(
        vertices = vertices.len(),
        samples = points.len(),
        step = config.step_degrees,
        "Densified track"
    );

    Ok(Transect { points })
}

/// Samples on the line through `earlier` and `later`, at longitudes
/// `later.lon + k * step` moving toward `earlier.lon` (exclusive), returned
/// in track order.
fn segment_samples(
    index: usize,
    earlier: TrackPoint,
    later: TrackPoint,
    step: f64,
) -> Result<Vec<TrackPoint>> {
    let run = earlier.lon - later.lon;
    if run == 0.0 {
        return Err(AnalysisError::DegenerateSegment {
            index,
            lon: later.lon,
        });
    }

    let slope = (earlier.lat - later.lat) / run;
    let intercept = earlier.lat - slope * earlier.lon;
    let signed_step = step.copysign(run);
    let count = (run / signed_step - ENDPOINT_TOLERANCE).ceil() as usize;

    let mut samples: Vec<TrackPoint> = (0..count)
        .map(|k| {
            let lon = later.lon + k as f64 * signed_step;
            TrackPoint::new(lon, slope * lon + intercept)
        })
        .collect();
    samples.reverse();

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_samples_westward() {
        let earlier = TrackPoint::new(-90.0, 25.0);
        let later = TrackPoint::new(-91.0, 26.0);
        let samples = segment_samples(1, earlier, later, 0.1).unwrap();

        assert_eq!(samples.len(), 10);
        // Walks from just west of the earlier vertex to the later vertex
        assert!((samples[0].lon - (-90.1)).abs() < 1e-9);
        assert!((samples[9].lon - (-91.0)).abs() < 1e-9);
        for s in &samples {
            // y = -x - 65 on this segment
            assert!((s.lat - (-s.lon - 65.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_segment_samples_eastward() {
        let earlier = TrackPoint::new(-90.0, 25.0);
        let later = TrackPoint::new(-89.5, 25.0);
        let samples = segment_samples(1, earlier, later, 0.1).unwrap();

        assert_eq!(samples.len(), 5);
        assert!((samples[0].lon - (-89.9)).abs() < 1e-9);
        assert!((samples[4].lon - (-89.5)).abs() < 1e-9);
    }

    #[test]
    fn test_segment_samples_exclude_earlier_vertex_despite_rounding() {
        // -86.0 - -88.2 is slightly more than 2.2 in binary
        let earlier = TrackPoint::new(-86.0, 23.5);
        let later = TrackPoint::new(-88.2, 24.6);
        let samples = segment_samples(1, earlier, later, 0.1).unwrap();

        assert_eq!(samples.len(), 22);
        assert!((samples[0].lon - (-86.1)).abs() < 1e-9);
        assert!(samples.iter().all(|s| s.lon < -86.0 - 0.05));
        assert_eq!(samples.last().unwrap().lon, -88.2);
    }

    #[test]
    fn test_segment_samples_degenerate() {
        let a = TrackPoint::new(-90.0, 25.0);
        let b = TrackPoint::new(-90.0, 26.0);
        let err = segment_samples(3, a, b, 0.1).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::DegenerateSegment { index: 3, lon } if lon == -90.0
        ));
    }

    #[test]
    fn test_densify_anchors_on_second_vertex() {
        let vertices = [
            TrackPoint::new(-86.0, 23.5),
            TrackPoint::new(-88.2, 24.6),
            TrackPoint::new(-90.6, 26.0),
        ];
        let transect = densify(&vertices, &TransectConfig::default()).unwrap();

        assert_eq!(transect.points[0], vertices[1]);
        let last = transect.points.last().unwrap();
        assert!((last.lon - vertices[2].lon).abs() < 1e-9);
        assert!((last.lat - vertices[2].lat).abs() < 1e-9);
    }

    #[test]
    fn test_densify_rejects_short_track() {
        let err = densify(&[TrackPoint::new(0.0, 0.0)], &TransectConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidTrack(_)));
    }

    #[test]
    fn test_densify_rejects_non_finite() {
        let vertices = [TrackPoint::new(0.0, 0.0), TrackPoint::new(f64::NAN, 1.0)];
        let err = densify(&vertices, &TransectConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidTrack(_)));
    }

    #[test]
    fn test_build_transect_length_mismatch() {
        let err = build_transect(&[-90.0, -91.0], &[25.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidTrack(_)));
    }
}
