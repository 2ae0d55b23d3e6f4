//! Base stat profile of a single record

use dexflow_types::{Record, Stat};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One spoke of the radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub axis: String,
    pub value: f64,
}

/// Radar chart dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarProfile {
    pub id: String,
    pub category: String,
    pub axes: Vec<RadarAxis>,
    /// Largest axis value; the outer ring of the chart
    pub max_value: f64,
}

impl RadarProfile {
    /// Profile of the first record named `id`
    pub fn for_record(records: &[Record], id: &str) -> Option<Self> {
        records.iter().find(|r| r.id == id).map(Self::from_record)
    }

    pub fn from_record(record: &Record) -> Self {
        let axes: Vec<RadarAxis> = Stat::base_stats()
            .iter()
            .map(|stat| RadarAxis {
                axis: stat.label().to_string(),
                value: record.measurement(*stat),
            })
            .collect();
        let max_value = axes
            .iter()
            .map(|a| a.value)
            .filter(|v| !v.is_nan())
            .fold(0.0, f64::max);
        Self {
            id: record.id.clone(),
            category: record.primary_category.clone(),
            axes,
            max_value,
        }
    }

    /// Angle of spoke `i` in radians, the first spoke pointing up
    pub fn angle(&self, i: usize) -> f64 {
        let slice = 2.0 * PI / self.axes.len() as f64;
        slice * i as f64 - PI / 2.0
    }

    /// Cartesian position of spoke `i`'s value on a chart of `radius`,
    /// centered on the origin. Values scale linearly from 0 to `max_value`.
    pub fn vertex(&self, i: usize, radius: f64) -> Option<(f64, f64)> {
        let axis = self.axes.get(i)?;
        let r = if self.max_value > 0.0 {
            axis.value / self.max_value * radius
        } else {
            0.0
        };
        let angle = self.angle(i);
        Some((r * angle.cos(), r * angle.sin()))
    }

    pub fn vertices(&self, radius: f64) -> Vec<(f64, f64)> {
        (0..self.axes.len())
            .filter_map(|i| self.vertex(i, radius))
            .collect()
    }
}
