//! Category entries: records split across their categories
//!
//! A single-category record yields one entry of weight 1.0; a dual-category
//! record yields two entries of weight 0.5 so each record contributes a total
//! weight of exactly 1.0 to the flow.

use dexflow_types::{Record, Stat};

/// A (record, category, weight) projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a> {
    pub record: &'a Record,
    pub category: &'a str,
    pub weight: f64,
}

impl Entry<'_> {
    /// Read a measurement of the underlying record
    pub fn measurement(&self, stat: Stat) -> f64 {
        self.record.measurement(stat)
    }
}

/// Entries of one record, primary category first
pub fn entries_for(record: &Record) -> Vec<Entry<'_>> {
    let weight = if record.is_dual() { 0.5 } else { 1.0 };
    record
        .categories()
        .map(|category| Entry {
            record,
            category,
            weight,
        })
        .collect()
}

/// Entries of all records, in record order
pub fn expand(records: &[Record]) -> Vec<Entry<'_>> {
    records.iter().flat_map(entries_for).collect()
}
