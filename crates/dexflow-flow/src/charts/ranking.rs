//! Top-N ranking by summed stats

use dexflow_types::{Record, Stat};
use serde::{Deserialize, Serialize};

/// Stats summed into the ranking total
pub const DEFAULT_RANK_FIELDS: [Stat; 3] = [Stat::Attack, Stat::Hp, Stat::Defense];
/// Number of bars in the ranking chart
pub const DEFAULT_RANK_LIMIT: usize = 20;

/// One bar of the ranking chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecord {
    pub id: String,
    /// Primary category, used for the bar color
    pub category: String,
    pub total: f64,
}

/// Records ordered by the sum of `fields`, highest first, keeping input order
/// among ties, truncated to `limit`. NaN totals sort last.
pub fn rank_by_total(records: &[Record], fields: &[Stat], limit: usize) -> Vec<RankedRecord> {
    let mut ranked: Vec<RankedRecord> = records
        .iter()
        .map(|r| RankedRecord {
            id: r.id.clone(),
            category: r.primary_category.clone(),
            total: r.stats.total(fields),
        })
        .collect();
    ranked.sort_by(|a, b| match (a.total.is_nan(), b.total.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => b.total.total_cmp(&a.total),
    });
    ranked.truncate(limit);
    ranked
}
