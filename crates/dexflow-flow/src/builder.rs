//! Category flow graph construction
//!
//! [`FlowGraphBuilder`] turns records into a three-layer graph:
//!
//! ```text
//! root ──► category ──► threshold bucket
//! ```
//!
//! Node order is root, categories in first-seen order, then buckets in rule
//! order. Links are emitted per entry: the root link first, then one bucket
//! link per qualifying rule. Parallel links are never merged.

use crate::entry::expand;
use crate::error::{FlowError, FlowResult};
use dexflow_types::{FlowGraph, FlowLink, FlowNode, Record, Stat, ThresholdRule};
use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::debug;

/// Name of the root node unless overridden
pub const DEFAULT_ROOT_LABEL: &str = "All Pokémon";

/// The three stock buckets: attack, HP and defense above 100
pub fn default_rules() -> Vec<ThresholdRule> {
    vec![
        ThresholdRule::new("Attack > 100", "attack", 100.0),
        ThresholdRule::new("HP > 100", "hp", 100.0),
        ThresholdRule::new("Defense > 100", "defense", 100.0),
    ]
}

/// Builds flow graphs from records and threshold rules
#[derive(Debug, Clone)]
pub struct FlowGraphBuilder {
    root_label: String,
    rules: Vec<ThresholdRule>,
}

/// A rule whose measurement name has been checked
struct ResolvedRule<'a> {
    stat: Stat,
    rule: &'a ThresholdRule,
}

impl Default for FlowGraphBuilder {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl FlowGraphBuilder {
    /// Create a new builder with the given rules
    pub fn new(rules: Vec<ThresholdRule>) -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            rules,
        }
    }

    /// Set the root node name and return self for chaining
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    pub fn rules(&self) -> &[ThresholdRule] {
        &self.rules
    }

    /// Build the graph for `records`.
    ///
    /// Every check runs before any node or link is produced, so an
    /// `InvalidInput` error never comes with a partial graph.
    pub fn build(&self, records: &[Record]) -> FlowResult<FlowGraph> {
        let rules = self.resolve_rules()?;
        let (categories, entry_categories) = self.collect_categories(records)?;

        let bucket_base = 1 + categories.len();
        let mut nodes = Vec::with_capacity(bucket_base + rules.len());
        nodes.push(FlowNode::new(self.root_label.as_str()));
        nodes.extend(categories.iter().map(|c| FlowNode::new(*c)));
        nodes.extend(rules.iter().map(|r| FlowNode::new(r.rule.label.as_str())));

        let mut links = Vec::new();
        for (entry, category_index) in expand(records).into_iter().zip(entry_categories) {
            let category_index = 1 + category_index;
            links.push(FlowLink {
                source: 0,
                target: category_index,
                value: entry.weight,
            });
            for (offset, resolved) in rules.iter().enumerate() {
                if resolved.rule.admits(entry.measurement(resolved.stat)) {
                    links.push(FlowLink {
                        source: category_index,
                        target: bucket_base + offset,
                        value: entry.weight,
                    });
                }
            }
        }

        debug!(
            "Built flow graph: {} records, {} nodes, {} links",
            records.len(),
            nodes.len(),
            links.len()
        );
        Ok(FlowGraph { nodes, links })
    }

    fn resolve_rules(&self) -> FlowResult<Vec<ResolvedRule<'_>>> {
        let mut labels = HashSet::new();
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                let field = format!("rules[{i}]");
                let stat = rule.resolve().ok_or_else(|| {
                    FlowError::invalid_input(
                        format!("{field}.measurement"),
                        format!("unknown measurement '{}'", rule.measurement),
                    )
                })?;
                if rule.label.trim().is_empty() {
                    return Err(FlowError::invalid_input(
                        format!("{field}.label"),
                        "must not be empty",
                    ));
                }
                if rule.label == self.root_label || !labels.insert(rule.label.as_str()) {
                    return Err(FlowError::invalid_input(
                        format!("{field}.label"),
                        format!("duplicate node name '{}'", rule.label),
                    ));
                }
                Ok(ResolvedRule { stat, rule })
            })
            .collect()
    }

    /// Distinct categories in first-seen order, primary before secondary,
    /// plus the category position of every entry in expansion order
    fn collect_categories<'r>(
        &self,
        records: &'r [Record],
    ) -> FlowResult<(IndexSet<&'r str>, Vec<usize>)> {
        let mut categories = IndexSet::new();
        let mut entry_categories = Vec::new();
        for (i, record) in records.iter().enumerate() {
            if record.primary_category.trim().is_empty() {
                return Err(FlowError::invalid_input(
                    format!("records[{i}].primary_category"),
                    format!("record '{}' has no primary category", record.id),
                ));
            }
            for category in record.categories() {
                if category == self.root_label || self.rules.iter().any(|r| r.label == category) {
                    return Err(FlowError::invalid_input(
                        format!("records[{i}]"),
                        format!("category '{category}' collides with a reserved node name"),
                    ));
                }
                let (index, _) = categories.insert_full(category);
                entry_categories.push(index);
            }
        }
        Ok((categories, entry_categories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexflow_types::Stats;

    fn stats(attack: f64, hp: f64, defense: f64) -> Stats {
        Stats {
            attack,
            hp,
            defense,
            ..Stats::default()
        }
    }

    #[test]
    fn test_default_builder_uses_stock_rules() {
        let builder = FlowGraphBuilder::default();
        assert_eq!(builder.root_label(), DEFAULT_ROOT_LABEL);
        let labels: Vec<&str> = builder.rules().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Attack > 100", "HP > 100", "Defense > 100"]);
    }

    #[test]
    fn test_empty_records_yield_root_and_buckets() {
        let graph = FlowGraphBuilder::default().build(&[]).unwrap();
        assert_eq!(graph.nodes.len(), 4);
        assert!(graph.links.is_empty());
    }

    #[test]
    fn test_secondary_category_that_repeats_primary_of_other_record() {
        let records = vec![
            Record::new("A", "Grass", stats(0.0, 0.0, 0.0)).with_secondary("Poison"),
            Record::new("B", "Poison", stats(0.0, 0.0, 0.0)),
        ];
        let graph = FlowGraphBuilder::new(vec![]).build(&records).unwrap();
        let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec![DEFAULT_ROOT_LABEL, "Grass", "Poison"]);
        assert_eq!(graph.links[2].target, 2);
        assert_eq!(graph.links[2].value, 1.0);
    }

    #[test]
    fn test_repeated_category_links_point_at_first_seen_node() {
        let records = vec![
            Record::new("Bulbasaur", "Grass", stats(0.0, 0.0, 0.0)).with_secondary("Poison"),
            Record::new("Ekans", "Poison", stats(0.0, 0.0, 0.0)),
            Record::new("Oddish", "Grass", stats(0.0, 0.0, 0.0)).with_secondary("Poison"),
            Record::new("Onix", "Rock", stats(0.0, 0.0, 160.0)),
        ];
        let graph = FlowGraphBuilder::default().build(&records).unwrap();
        let targets: Vec<usize> = graph
            .links
            .iter()
            .filter(|l| l.source == 0)
            .map(|l| l.target)
            .collect();
        assert_eq!(targets, vec![1, 2, 2, 1, 2, 3]);
        let last = graph.links.last().unwrap();
        assert_eq!((last.source, last.target, last.value), (3, 6, 1.0));
    }
}
