//! Shared test utilities for the ocean-model comparison workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Synthetic ocean data generators
//! - Storm track and station fixtures
//! - Temporary file helpers
//! - Approximate float assertions
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, create_warm_pool_cube, laura};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of (lon, lat) pairs.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_coords_approx_eq;
///
/// assert_coords_approx_eq!((-90.0001, 25.0001), (-90.0, 25.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
}

/// Macro for approximate equality of optional values, where `None` only
/// matches `None`.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_option_approx_eq;
///
/// assert_option_approx_eq!(Some(1.0001), Some(1.0), 0.001);
/// assert_option_approx_eq!(None::<f64>, None::<f64>, 0.001);
/// ```
#[macro_export]
macro_rules! assert_option_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        match ($left, $right) {
            (Some(l), Some(r)) => $crate::assert_approx_eq!(l, r, $epsilon),
            (None, None) => {}
            (l, r) => panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`",
                l, r
            ),
        }
    }};
}
