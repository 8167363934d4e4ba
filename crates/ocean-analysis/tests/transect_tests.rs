//! Integration tests for track densification.

use ocean_analysis::{build_transect, densify, AnalysisError, TrackPoint, TransectConfig};
use test_utils::{assert_approx_eq, assert_coords_approx_eq, create_linear_track};

#[test]
fn test_two_point_track_starts_at_second_vertex() {
    let (lons, lats) = build_transect(&[-90.0, -91.0], &[25.0, 26.0]).unwrap();

    assert_eq!((lons[0], lats[0]), (-91.0, 26.0));
    // anchor plus ten samples from just west of -90 to -91
    assert_eq!(lons.len(), 11);
    assert_eq!(lats.len(), 11);
    assert_approx_eq!(lons[1], -90.1, 1e-9);
    assert_approx_eq!(*lons.last().unwrap(), -91.0, 1e-9);

    for w in lons[1..].windows(2) {
        assert_approx_eq!(w[0] - w[1], 0.1, 1e-9);
    }
    for (&lon, &lat) in lons.iter().zip(&lats) {
        assert!(lon >= -91.0 - 1e-9 && lon < -90.0);
        assert_approx_eq!(lat, -lon - 65.0, 1e-9);
    }
}

#[test]
fn test_reversed_segment_reverses_ordering() {
    let (forward, _) = build_transect(&[-90.0, -91.0], &[25.0, 26.0]).unwrap();
    let (backward, backward_lats) = build_transect(&[-91.0, -90.0], &[26.0, 25.0]).unwrap();

    assert_eq!((backward[0], backward_lats[0]), (-90.0, 25.0));
    assert!(forward[1..].windows(2).all(|w| w[1] < w[0]));
    assert!(backward[1..].windows(2).all(|w| w[1] > w[0]));
    assert_approx_eq!(backward[1], -90.9, 1e-9);
    assert_approx_eq!(*backward.last().unwrap(), -90.0, 1e-9);
}

#[test]
fn test_equal_longitudes_are_rejected() {
    let err = build_transect(&[-90.0, -90.0], &[25.0, 26.0]).unwrap_err();
    match err {
        AnalysisError::DegenerateSegment { index, lon } => {
            assert_eq!(index, 1);
            assert_eq!(lon, -90.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_degenerate_segment_later_in_track() {
    let err = build_transect(&[-88.0, -90.0, -90.0], &[24.0, 25.0, 27.0]).unwrap_err();
    assert!(matches!(err, AnalysisError::DegenerateSegment { index: 2, .. }));
    assert!(err.to_string().contains("degenerate"));
}

#[test]
fn test_multi_segment_track_is_continuous() {
    let (lons, lats) = create_linear_track((-86.0, 23.0), (-92.0, 29.0), 4);
    let (out_lons, out_lats) = build_transect(&lons, &lats).unwrap();

    assert_eq!((out_lons[0], out_lats[0]), (lons[1], lats[1]));
    assert_coords_approx_eq!(
        (*out_lons.last().unwrap(), *out_lats.last().unwrap()),
        (-92.0, 29.0),
        1e-9
    );
    for w in out_lons[1..].windows(2) {
        assert!((w[1] - w[0]).abs() <= 0.1 + 1e-9);
    }
    // straight track: every sample lies on y = -x - 63
    for (&lon, &lat) in out_lons.iter().zip(&out_lats) {
        assert_approx_eq!(lat, -lon - 63.0, 1e-9);
    }
}

#[test]
fn test_custom_step() {
    let vertices = [TrackPoint::new(-90.0, 25.0), TrackPoint::new(-91.0, 25.0)];
    let config = TransectConfig { step_degrees: 0.5 };
    let transect = densify(&vertices, &config).unwrap();

    assert_eq!(transect.lons(), vec![-91.0, -90.5, -91.0]);
    assert!(transect.lats().iter().all(|&lat| lat == 25.0));
}

#[test]
fn test_invalid_step_is_a_config_error() {
    let vertices = [TrackPoint::new(-90.0, 25.0), TrackPoint::new(-91.0, 25.0)];
    let config = TransectConfig { step_degrees: 0.0 };
    let err = densify(&vertices, &config).unwrap_err();
    assert!(matches!(err, AnalysisError::ConfigError(_)));
}

#[test]
fn test_transect_serializes_as_points() {
    let vertices = [TrackPoint::new(-90.0, 25.0), TrackPoint::new(-90.2, 25.0)];
    let transect = densify(&vertices, &TransectConfig::default()).unwrap();
    let json = serde_json::to_value(&transect).unwrap();

    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), transect.len());
    assert_eq!(points[0]["lon"], -90.2);
    assert_eq!(points[0]["lat"], 25.0);
}
