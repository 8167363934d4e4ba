//! Underwater glider profiles for model comparison.

use chrono::{DateTime, Utc};
use ocean_common::{TimeWindow, Variable};
use serde::{Deserialize, Serialize};

use crate::config::OhcConfig;
use crate::profile::VerticalProfile;

/// One glider measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GliderSample {
    pub time: DateTime<Utc>,
    pub lon: f64,
    pub lat: f64,
    /// Depth in metres, positive down.
    pub depth: f64,
    pub temperature: f64,
    pub salinity: f64,
}

impl GliderSample {
    fn value(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Temperature => self.temperature,
            Variable::Salinity => self.salinity,
        }
    }
}

/// Samples from one glider deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GliderProfile {
    pub id: String,
    pub samples: Vec<GliderSample>,
}

impl GliderProfile {
    pub fn new(id: impl Into<String>, samples: Vec<GliderSample>) -> Self {
        Self {
            id: id.into(),
            samples,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples whose time lies strictly inside `window`.
    pub fn within(&self, window: &TimeWindow) -> GliderProfile {
        GliderProfile {
            id: self.id.clone(),
            samples: self
                .samples
                .iter()
                .filter(|s| window.contains(&s.time))
                .copied()
                .collect(),
        }
    }

    /// Position of the first sample as (lon, lat).
    pub fn location(&self) -> Option<(f64, f64)> {
        self.samples.first().map(|s| (s.lon, s.lat))
    }

    /// Depth-sorted profile of `variable` down to `max_depth`. Samples with
    /// a missing depth are dropped.
    pub fn to_profile(&self, variable: Variable, max_depth: f64) -> VerticalProfile {
        let mut pairs: Vec<(f64, f64)> = self
            .samples
            .iter()
            .filter(|s| !s.depth.is_nan())
            .map(|s| (s.depth, s.value(variable)))
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (depth, values): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        // equal lengths by construction
        VerticalProfile::new(depth, values)
            .unwrap_or_default()
            .truncate_depth(max_depth)
    }

    /// Heat content of the temperature profile.
    pub fn ohc(&self, config: &OhcConfig) -> Option<f64> {
        self.to_profile(Variable::Temperature, f64::INFINITY)
            .ohc(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample(minute: i64, depth: f64, temperature: f64) -> GliderSample {
        GliderSample {
            time: Utc.with_ymd_and_hms(2020, 8, 26, 12, 0, 0).unwrap() + Duration::minutes(minute),
            lon: -92.97 + minute as f64 * 1e-4,
            lat: 27.48,
            depth,
            temperature,
            salinity: 36.0,
        }
    }

    fn glider() -> GliderProfile {
        GliderProfile::new(
            "ng314",
            vec![
                sample(-40, 0.0, 30.5),
                sample(-20, 20.0, 29.0),
                sample(0, 0.0, 30.0),
                sample(10, 60.0, 26.0),
                sample(20, f64::NAN, 25.0),
                sample(25, 5.0, 30.0),
                sample(30, 120.0, 22.0),
            ],
        )
    }

    fn window() -> TimeWindow {
        let t = Utc.with_ymd_and_hms(2020, 8, 26, 12, 0, 0).unwrap();
        TimeWindow::around(t, t, Duration::minutes(30))
    }

    #[test]
    fn test_within_is_strict() {
        let matched = glider().within(&window());
        // -40 is outside; +30 sits on the boundary
        assert_eq!(matched.samples.len(), 5);
        assert_eq!(matched.id, "ng314");
    }

    #[test]
    fn test_location() {
        let matched = glider().within(&window());
        let (lon, lat) = matched.location().unwrap();
        assert!((lon - (-92.972)).abs() < 1e-9);
        assert_eq!(lat, 27.48);
        assert_eq!(GliderProfile::default().location(), None);
    }

    #[test]
    fn test_to_profile_sorts_and_truncates() {
        let profile = glider().within(&window()).to_profile(Variable::Temperature, 50.0);
        assert_eq!(profile.depth(), &[0.0, 5.0, 20.0]);
        assert_eq!(profile.values(), &[30.0, 30.0, 29.0]);

        let salt = glider().to_profile(Variable::Salinity, 1000.0);
        assert!(salt.values().iter().all(|&s| s == 36.0));
    }

    #[test]
    fn test_ohc_uses_profile_rule() {
        let matched = glider().within(&window());
        let expected = matched
            .to_profile(Variable::Temperature, f64::INFINITY)
            .ohc(&OhcConfig::default());
        assert!(expected.is_some());
        assert_eq!(matched.ohc(&OhcConfig::default()), expected);
    }
}
