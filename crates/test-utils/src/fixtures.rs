//! Common test fixtures for ocean-model comparison tests.
//!
//! Positions and times approximate Hurricane Laura (2020) crossing the Gulf
//! of Mexico, the case these tools are most often exercised on.

/// Region limits as `[lon_min, lon_max, lat_min, lat_max]`.
pub mod region {
    /// Gulf of Mexico
    pub const GOMEX: [f64; 4] = [-100.0, -80.0, 18.0, 32.0];

    /// Gulf segment of a track: west of 84W, south of 30N
    pub const LAURA_GULF: [f64; 4] = [-100.0, -84.0, 18.0, 30.0];

    /// Inverted limits, rejected by bbox constructors
    pub const INVALID: [f64; 4] = [-80.0, -100.0, 18.0, 32.0];
}

/// Best-track fixes for Hurricane Laura.
pub mod laura {
    pub const NAME: &str = "LAURA";

    /// (ISO time, lon, lat, usa_sshs)
    pub const FIXES: [(&str, f64, f64, i32); 8] = [
        ("2020-08-24T12:00:00Z", -80.3, 21.3, 0),
        ("2020-08-25T00:00:00Z", -83.4, 22.4, 0),
        ("2020-08-25T12:00:00Z", -86.0, 23.5, 1),
        ("2020-08-26T00:00:00Z", -88.2, 24.6, 2),
        ("2020-08-26T12:00:00Z", -90.6, 26.0, 3),
        ("2020-08-27T00:00:00Z", -92.6, 27.6, 4),
        ("2020-08-27T06:00:00Z", -93.3, 29.1, 4),
        ("2020-08-27T12:00:00Z", -93.3, 31.0, 1),
    ];

    /// Number of fixes strictly inside `region::LAURA_GULF`
    pub const GULF_FIX_COUNT: usize = 5;
}

/// Profile and glider positions.
pub mod stations {
    /// (lon, lat) of points where model profiles are compared
    pub const PROFILE_LOCATIONS: [(f64, f64); 2] = [(-85.0, 22.7), (-91.5, 26.5)];

    /// Glider deployment near Laura's path
    pub const GLIDER_ID: &str = "ng314";
    pub const GLIDER_LOCATION: (f64, f64) = (-92.97, 27.48);
    pub const GLIDER_TIME: &str = "2020-08-26T18:00:00Z";

    /// Half-width of the glider/model matching window
    pub const MATCH_WINDOW_MINUTES: i64 = 30;
}

/// Sample configuration documents.
pub mod config {
    /// OHC constants with a 20 C isotherm and defaults elsewhere
    pub const OHC_20C_YAML: &str = "isotherm_c: 20.0\nsurface_depth_limit_m: 10.0\n";

    /// A YAML document with an invalid density
    pub const OHC_INVALID_YAML: &str = "density: -1.0\n";
}
