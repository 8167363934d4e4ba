//! Generators for synthetic ocean data.
//!
//! The shapes mimic the Gulf of Mexico in late summer: a warm surface mixed
//! layer over a thermocline, warmest in the south-east where the Loop
//! Current enters, with land in the far north. Values are predictable so
//! tests can reason about which columns have a warm layer.

/// Depth levels (m) similar to the upper part of the GOFS 3.1 grid.
pub const STANDARD_DEPTHS: [f64; 24] = [
    0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 60.0,
    70.0, 80.0, 90.0, 100.0, 125.0, 150.0, 200.0, 300.0,
];

/// Latitude north of which the synthetic grid is land (NaN).
pub const LAND_LATITUDE: f64 = 30.5;

/// A `[depth][lat][lon]` row-major temperature cube with its axes.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticCube {
    pub depth: Vec<f64>,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub values: Vec<f64>,
}

impl SyntheticCube {
    /// Value at (depth, lat, lon) indices.
    pub fn at(&self, k: usize, j: usize, i: usize) -> f64 {
        self.values[(k * self.lat.len() + j) * self.lon.len() + i]
    }

    /// Column of values at (lat, lon) indices, surface first.
    pub fn column(&self, j: usize, i: usize) -> Vec<f64> {
        (0..self.depth.len()).map(|k| self.at(k, j, i)).collect()
    }
}

/// Evenly spaced axis of `n` values starting at `start`.
///
/// # Example
///
/// ```
/// use test_utils::regular_axis;
///
/// assert_eq!(regular_axis(-90.0, 0.5, 3), vec![-90.0, -89.5, -89.0]);
/// ```
pub fn regular_axis(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Temperature at `depth` for a profile with the given surface temperature
/// and mixed-layer depth.
///
/// Constant through the mixed layer, then cooling by 0.06 C/m down to a
/// 6 C floor.
pub fn warm_layer_temperature(depth: f64, surface_temp: f64, mixed_layer_depth: f64) -> f64 {
    if depth <= mixed_layer_depth {
        surface_temp
    } else {
        (surface_temp - 0.06 * (depth - mixed_layer_depth)).max(6.0)
    }
}

/// Temperature profile over `depths`.
///
/// # Example
///
/// ```
/// use test_utils::create_temperature_profile;
///
/// let temps = create_temperature_profile(&[0.0, 50.0, 100.0], 30.0, 50.0);
/// assert_eq!(temps, vec![30.0, 30.0, 27.0]);
/// ```
pub fn create_temperature_profile(depths: &[f64], surface_temp: f64, mixed_layer_depth: f64) -> Vec<f64> {
    depths
        .iter()
        .map(|&z| warm_layer_temperature(z, surface_temp, mixed_layer_depth))
        .collect()
}

/// Creates a warm-pool temperature cube over the Gulf of Mexico
/// (100W-80W, 18N-32N).
///
/// # Arguments
///
/// * `ny` - Number of latitudes (at least 2)
/// * `nx` - Number of longitudes (at least 2)
/// * `positive_360` - Express longitudes as 0-360 (GOFS style) instead of
///   -180..180
///
/// Surface temperature falls from 31 C at the south-east corner to 26.5 C
/// in the north-west, and the mixed layer thins in the same direction, so
/// every ocean column has a surface warm layer.
/// Columns north of [`LAND_LATITUDE`] are NaN.
pub fn create_warm_pool_cube(ny: usize, nx: usize, positive_360: bool) -> SyntheticCube {
    let depth = STANDARD_DEPTHS.to_vec();
    let lat = regular_axis(18.0, 14.0 / (ny.max(2) - 1) as f64, ny);
    let signed_lon = regular_axis(-100.0, 20.0 / (nx.max(2) - 1) as f64, nx);
    let lon = if positive_360 {
        signed_lon.iter().map(|&x| x + 360.0).collect()
    } else {
        signed_lon.clone()
    };

    let mut values = Vec::with_capacity(depth.len() * ny * nx);
    for &z in &depth {
        for &y in &lat {
            for &x in &signed_lon {
                if y > LAND_LATITUDE {
                    values.push(f64::NAN);
                    continue;
                }
                // 0 at the south-east corner, 1 at the north-west corner
                let remoteness = ((y - 18.0) / 14.0 + (-80.0 - x) / 20.0) / 2.0;
                let surface = 31.0 - 4.5 * remoteness;
                let mld = 60.0 - 40.0 * remoteness;
                values.push(warm_layer_temperature(z, surface, mld));
            }
        }
    }

    SyntheticCube {
        depth,
        lat,
        lon,
        values,
    }
}

/// Creates a straight track of `n` vertices from `start` to `end`, each
/// given as (lon, lat). Returns parallel longitude and latitude arrays.
pub fn create_linear_track(start: (f64, f64), end: (f64, f64), n: usize) -> (Vec<f64>, Vec<f64>) {
    let steps = n.saturating_sub(1).max(1) as f64;
    (0..n)
        .map(|i| {
            let i = i as f64;
            (
                start.0 + (end.0 - start.0) * i / steps,
                start.1 + (end.1 - start.1) * i / steps,
            )
        })
        .unzip()
}
