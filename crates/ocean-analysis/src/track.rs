//! Best-track storm fixes and Saffir-Simpson categories.

use std::fmt;

use chrono::{DateTime, Utc};
use ocean_common::{BoundingBox, TimeWindow};
use serde::{Deserialize, Serialize};

use crate::config::TransectConfig;
use crate::error::{AnalysisError, Result};
use crate::transect::{densify, TrackPoint, Transect};

/// Saffir-Simpson intensity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaffirSimpson {
    Depression,
    TropicalStorm,
    Category1,
    Category2,
    Category3,
    Category4,
    Category5,
}

impl SaffirSimpson {
    /// Map an IBTrACS `usa_sshs` code. Codes below -1 are non-tropical or
    /// unknown systems and have no class.
    pub fn from_sshs(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Depression),
            0 => Some(Self::TropicalStorm),
            1 => Some(Self::Category1),
            2 => Some(Self::Category2),
            3 => Some(Self::Category3),
            4 => Some(Self::Category4),
            5 => Some(Self::Category5),
            _ => None,
        }
    }

    /// Short plot label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Depression => "TD",
            Self::TropicalStorm => "TS",
            Self::Category1 => "Cat 1",
            Self::Category2 => "Cat 2",
            Self::Category3 => "Cat 3",
            Self::Category4 => "Cat 4",
            Self::Category5 => "Cat 5",
        }
    }

    /// The `usa_sshs` code for this class.
    pub fn sshs(&self) -> i32 {
        match self {
            Self::Depression => -1,
            Self::TropicalStorm => 0,
            Self::Category1 => 1,
            Self::Category2 => 2,
            Self::Category3 => 3,
            Self::Category4 => 4,
            Self::Category5 => 5,
        }
    }
}

impl fmt::Display for SaffirSimpson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One best-track fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormFix {
    pub time: DateTime<Utc>,
    pub lon: f64,
    pub lat: f64,
    pub category: Option<SaffirSimpson>,
}

/// A named storm's fixes in time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormTrack {
    pub name: String,
    pub points: Vec<StormFix>,
}

impl StormTrack {
    /// Create a track; fixes are sorted by time.
    pub fn new(name: impl Into<String>, mut points: Vec<StormFix>) -> Self {
        points.sort_by_key(|p| p.time);
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Keep the fixes matching `predicate`.
    pub fn select<F>(&self, predicate: F) -> StormTrack
    where
        F: Fn(&StormFix) -> bool,
    {
        StormTrack {
            name: self.name.clone(),
            points: self.points.iter().filter(|p| predicate(p)).cloned().collect(),
        }
    }

    /// Keep the fixes strictly inside `bbox`.
    pub fn within(&self, bbox: &BoundingBox) -> StormTrack {
        self.select(|p| bbox.contains_strict(p.lon, p.lat))
    }

    pub fn lons(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lon).collect()
    }

    pub fn lats(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lat).collect()
    }

    /// First and last fix times.
    pub fn time_span(&self) -> Option<TimeWindow> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some(TimeWindow::new(first.time, last.time))
    }

    /// Weakest and strongest category present.
    pub fn category_range(&self) -> Option<(SaffirSimpson, SaffirSimpson)> {
        let categories = self.points.iter().filter_map(|p| p.category);
        let min = categories.clone().min()?;
        let max = categories.max()?;
        Some((min, max))
    }

    /// Fix positions as transect vertices.
    pub fn vertices(&self) -> Vec<TrackPoint> {
        self.points
            .iter()
            .map(|p| TrackPoint::new(p.lon, p.lat))
            .collect()
    }

    /// Densify the track into a transect.
    pub fn to_transect(&self, config: &TransectConfig) -> Result<Transect> {
        if self.points.len() < 2 {
            return Err(AnalysisError::invalid_track(format!(
                "storm {} has {} fixes",
                self.name,
                self.points.len()
            )));
        }
        densify(&self.vertices(), config)
    }
}
