//! Flow graph types for Sankey-style layouts
//!
//! Links address nodes by index into [`FlowGraph::nodes`], so a graph is plain
//! data: it serializes as-is and its node list can be copied independently
//! before being handed to a layout engine.

use serde::{Deserialize, Serialize};

/// Flow graph for visualization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

/// Flow node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowNode {
    pub name: String,
}

/// Directed, weighted flow link
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowLink {
    /// Index of the source node
    pub source: usize,
    /// Index of the target node
    pub target: usize,
    /// Link weight
    pub value: f64,
}

impl FlowNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FlowGraph {
    /// Index of the node with the given name
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name == name)
    }

    /// Name of the node at `index`
    pub fn node_name(&self, index: usize) -> Option<&str> {
        self.nodes.get(index).map(|n| n.name.as_str())
    }

    /// Links leaving the node at `index`
    pub fn links_from(&self, index: usize) -> impl Iterator<Item = &FlowLink> {
        self.links.iter().filter(move |l| l.source == index)
    }

    /// Links entering the node at `index`
    pub fn links_into(&self, index: usize) -> impl Iterator<Item = &FlowLink> {
        self.links.iter().filter(move |l| l.target == index)
    }

    /// Node value as a Sankey layout computes it: the larger of the inbound
    /// and outbound totals.
    pub fn node_value(&self, index: usize) -> f64 {
        let inbound: f64 = self.links_into(index).map(|l| l.value).sum();
        let outbound: f64 = self.links_from(index).map(|l| l.value).sum();
        inbound.max(outbound)
    }

    /// Total weight of links between two named nodes
    pub fn flow_between(&self, source: &str, target: &str) -> f64 {
        match (self.node_index(source), self.node_index(target)) {
            (Some(s), Some(t)) => self
                .links
                .iter()
                .filter(|l| l.source == s && l.target == t)
                .map(|l| l.value)
                .sum(),
            _ => 0.0,
        }
    }

    /// Independent copy of the graph for a layout engine to annotate
    pub fn to_layout_input(&self) -> (Vec<FlowNode>, Vec<FlowLink>) {
        (self.nodes.clone(), self.links.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
