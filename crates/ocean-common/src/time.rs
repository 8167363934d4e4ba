//! Time windows for matching observations to model snapshots.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Hours of day (UTC) at which RTOFS 6-hourly output is written.
pub const RTOFS_FORECAST_HOURS: [u32; 4] = [6, 12, 18, 24];

/// An open time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window from `start - pad` to `end + pad`.
    pub fn around(start: DateTime<Utc>, end: DateTime<Utc>, pad: Duration) -> Self {
        Self {
            start: start - pad,
            end: end + pad,
        }
    }

    /// Strict containment; the endpoints themselves are outside.
    pub fn contains(&self, t: &DateTime<Utc>) -> bool {
        t > &self.start && t < &self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when start and end are the same instant (a single snapshot).
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }
}

/// RTOFS output hour closest to the hour of day of `time`.
///
/// The earliest candidate wins ties.
pub fn nearest_forecast_hour(time: &DateTime<Utc>) -> u32 {
    let hour = time.hour() as i64;
    let mut best = RTOFS_FORECAST_HOURS[0];
    let mut best_distance = i64::MAX;
    for &candidate in &RTOFS_FORECAST_HOURS {
        let distance = (candidate as i64 - hour).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}
