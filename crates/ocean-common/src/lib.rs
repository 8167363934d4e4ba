//! Common types and utilities shared across the ocean-model comparison crates.

pub mod axis;
pub mod bbox;
pub mod error;
pub mod lon;
pub mod model;
pub mod time;

pub use axis::{
    axis_mask, curvilinear_subset, fractional_index, masked_range, nearest_index, rounded_index,
    CornerSubset,
};
pub use bbox::{BoundingBox, Region};
pub use error::{GeoError, GeoResult};
pub use lon::{to_positive_360, to_signed_180, LonConvention};
pub use model::{CoordinateNames, ModelSource, Variable};
pub use time::{nearest_forecast_hour, TimeWindow, RTOFS_FORECAST_HOURS};
