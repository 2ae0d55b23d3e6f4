//! Grouped averages by primary category and a key stat

use super::scatter::Extent;
use dexflow_types::{Record, Stat};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Records sharing a primary category and key value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupGroup {
    pub category: String,
    pub key: f64,
    pub count: usize,
    /// Mean of the summed `total_fields` across the group
    pub avg_total: f64,
}

/// Rollup groups plotted as key against average total, with axis extents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupPlot {
    pub key_stat: Stat,
    pub groups: Vec<RollupGroup>,
    pub x_extent: Option<Extent>,
    pub y_extent: Option<Extent>,
}

impl RollupPlot {
    /// Axis windows focused on a group, for click-to-zoom
    pub fn focus(&self, group: &RollupGroup, fraction: f64) -> Option<(Extent, Extent)> {
        let x = self.x_extent?.zoom_around(group.key, fraction);
        let y = self.y_extent?.zoom_around(group.avg_total, fraction);
        Some((x, y))
    }

    pub fn group(&self, category: &str, key: f64) -> Option<&RollupGroup> {
        let bits = key_bits(key);
        self.groups
            .iter()
            .find(|g| g.category == category && key_bits(g.key) == bits)
    }
}

/// Canonical bits for grouping: all NaNs are one key, `-0.0` equals `0.0`
fn key_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Group records by primary category, then by the value of `key`.
///
/// Groups are listed category by category in first-seen order, and within a
/// category by first-seen key. Keys compare by value, so `-0.0` joins `0.0`
/// and every NaN lands in one group.
pub fn rollup_by(records: &[Record], key: Stat, total_fields: &[Stat]) -> Vec<RollupGroup> {
    let mut grouped: IndexMap<&str, IndexMap<u64, (f64, usize, f64)>> = IndexMap::new();
    for record in records {
        let bits = key_bits(record.measurement(key));
        let slot = grouped
            .entry(record.primary_category.as_str())
            .or_default()
            .entry(bits)
            .or_insert((f64::from_bits(bits), 0, 0.0));
        slot.1 += 1;
        slot.2 += record.stats.total(total_fields);
    }

    grouped
        .into_iter()
        .flat_map(|(category, by_key)| {
            by_key.into_values().map(move |(key, count, sum)| RollupGroup {
                category: category.to_string(),
                key,
                count,
                avg_total: sum / count as f64,
            })
        })
        .collect()
}

/// [`rollup_by`] with extents over the keys and the average totals
pub fn rollup_plot(records: &[Record], key: Stat, total_fields: &[Stat]) -> RollupPlot {
    let groups = rollup_by(records, key, total_fields);
    RollupPlot {
        key_stat: key,
        x_extent: Extent::of(groups.iter().map(|g| g.key)),
        y_extent: Extent::of(groups.iter().map(|g| g.avg_total)),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bits_normalizes_zero_and_nan() {
        assert_eq!(key_bits(-0.0), key_bits(0.0));
        assert_eq!(key_bits(f64::NAN), key_bits(-f64::NAN));
        assert_ne!(key_bits(1.0), key_bits(-1.0));
    }
}
