//! ASCII tree rendering for flow graphs
//!
//! Gives a terminal view of a Sankey graph: the root, one branch per
//! category with its inbound weight, and one leaf per bucket the category
//! feeds.

use crate::error::FlowResult;
use crate::loader::load_records;
use crate::ChartConfig;
use ascii_tree::{write_tree, Tree};
use dexflow_types::FlowGraph;
use std::path::Path;

/// Trait for rendering flow graphs as ASCII trees
pub trait FlowGraphRenderer {
    /// Render the graph as an ASCII tree
    fn render_as_ascii_tree(&self) -> String;

    /// Render the branch of one category node
    fn render_category_node(&self, index: usize) -> Tree;
}

impl FlowGraphRenderer for FlowGraph {
    fn render_as_ascii_tree(&self) -> String {
        let root_name = self.node_name(0).unwrap_or("(empty)");
        let total: f64 = self.links_from(0).map(|l| l.value).sum();
        let root_label = format!("{root_name} (weight {total:.1})");

        let children = distinct_targets(self, 0)
            .into_iter()
            .map(|index| self.render_category_node(index))
            .collect();

        let tree = Tree::Node(root_label, children);
        let mut buffer = String::new();
        // Formatting into a String never fails
        let _ = write_tree(&mut buffer, &tree);
        buffer
    }

    fn render_category_node(&self, index: usize) -> Tree {
        let name = self.node_name(index).unwrap_or("?");
        let inbound: f64 = self.links_into(index).map(|l| l.value).sum();
        let label = format!("{name} ({inbound:.1})");

        let leaves = distinct_targets(self, index)
            .into_iter()
            .map(|bucket| {
                let bucket_name = self.node_name(bucket).unwrap_or("?");
                let value: f64 = self
                    .links_from(index)
                    .filter(|l| l.target == bucket)
                    .map(|l| l.value)
                    .sum();
                Tree::Leaf(vec![format!("{bucket_name}: {value:.1}")])
            })
            .collect();

        Tree::Node(label, leaves)
    }
}

/// Targets of links leaving `source`, deduplicated, in node order
fn distinct_targets(graph: &FlowGraph, source: usize) -> Vec<usize> {
    let mut targets: Vec<usize> = graph.links_from(source).map(|l| l.target).collect();
    targets.sort_unstable();
    targets.dedup();
    targets
}

/// Load records from CSV and render their flow graph as an ASCII tree
pub fn render_csv_as_ascii_tree(path: &Path, config: &ChartConfig) -> FlowResult<String> {
    let records = load_records(path)?;
    let graph = config.builder().build(&records)?;
    Ok(graph.render_as_ascii_tree())
}
