//! Threshold rules defining bucket nodes of a flow graph

use super::record::Stat;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A bucket definition: records whose `measurement` is strictly greater than
/// `threshold` flow into the node named `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    /// Bucket node name
    pub label: String,
    /// Measurement name, resolved against [`Stat`]
    pub measurement: String,
    /// Exclusive lower bound
    pub threshold: f64,
}

impl ThresholdRule {
    pub fn new(label: impl Into<String>, measurement: impl Into<String>, threshold: f64) -> Self {
        Self {
            label: label.into(),
            measurement: measurement.into(),
            threshold,
        }
    }

    /// Resolve the measurement name, `None` when it does not name a [`Stat`]
    pub fn resolve(&self) -> Option<Stat> {
        Stat::from_str(self.measurement.trim()).ok()
    }

    /// Strict greater-than; NaN never qualifies
    pub fn admits(&self, value: f64) -> bool {
        value > self.threshold
    }
}
