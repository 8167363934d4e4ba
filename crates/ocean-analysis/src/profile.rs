//! Vertical profiles of a single variable.

use serde::{Deserialize, Serialize};

use crate::config::OhcConfig;
use crate::error::{AnalysisError, Result};
use crate::ohc::integrate_warm_layer;

/// Paired depth (m, positive down) and value arrays for one water column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerticalProfile {
    depth: Vec<f64>,
    values: Vec<f64>,
}

impl VerticalProfile {
    /// Create a profile, rejecting arrays of different lengths.
    pub fn new(depth: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if depth.len() != values.len() {
            return Err(AnalysisError::shape_mismatch(
                "profile values",
                depth.len(),
                values.len(),
            ));
        }
        Ok(Self { depth, values })
    }

    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// Iterate over (depth, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.depth.iter().copied().zip(self.values.iter().copied())
    }

    /// Keep only samples with depth in `[0, max_depth]`.
    pub fn truncate_depth(&self, max_depth: f64) -> Self {
        let (depth, values) = self
            .iter()
            .filter(|(z, _)| *z >= 0.0 && *z <= max_depth)
            .unzip();
        Self { depth, values }
    }

    /// Ocean heat content of this profile, treating the values as
    /// temperature in degrees C. `None` when there is no surface-connected
    /// warm layer.
    pub fn ohc(&self, config: &OhcConfig) -> Option<f64> {
        integrate_warm_layer(&self.values, &self.depth, config)
    }

    /// Value at the sample nearest to `depth`.
    pub fn value_near(&self, depth: f64) -> Option<f64> {
        ocean_common::nearest_index(&self.depth, depth).map(|k| self.values[k])
    }
}
