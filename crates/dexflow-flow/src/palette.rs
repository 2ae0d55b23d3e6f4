//! Category color mapping
//!
//! Colors are a rendering concern, so the builder never sees them. Callers
//! pass a [`Palette`] to whatever draws or exports the graph.

use dexflow_types::{FlowGraph, FlowLink};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fallback for categories without an assigned color
pub const DEFAULT_FALLBACK_COLOR: &str = "#ccc";
/// Color of the root node
pub const ROOT_COLOR: &str = "#ccc";
/// Color of nodes that are neither root, category nor bucket
pub const UNKNOWN_NODE_COLOR: &str = "#999";
/// Bucket colors, assigned in rule order and cycled
pub const DEFAULT_BUCKET_COLORS: [&str; 3] = ["#e41a1c", "#377eb8", "#4daf4a"];

const CREATURE_TYPE_COLORS: [(&str, &str); 18] = [
    ("Bug", "#A8B820"),
    ("Dark", "#705848"),
    ("Dragon", "#7038F8"),
    ("Electric", "#F8D030"),
    ("Fairy", "#EE99AC"),
    ("Fighting", "#C03028"),
    ("Fire", "#F08030"),
    ("Flying", "#A890F0"),
    ("Ghost", "#705898"),
    ("Grass", "#78C850"),
    ("Ground", "#E0C068"),
    ("Ice", "#98D8D8"),
    ("Normal", "#A8A878"),
    ("Poison", "#A040A0"),
    ("Psychic", "#F85888"),
    ("Rock", "#B8A038"),
    ("Steel", "#B8B8D0"),
    ("Water", "#6890F0"),
];

/// Category to color mapping with a fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: IndexMap<String, String>,
    fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(IndexMap::new(), DEFAULT_FALLBACK_COLOR)
    }
}

impl Palette {
    pub fn new(colors: IndexMap<String, String>, fallback: impl Into<String>) -> Self {
        Self {
            colors,
            fallback: fallback.into(),
        }
    }

    /// The eighteen standard creature type colors
    pub fn creature_types() -> Self {
        let colors = CREATURE_TYPE_COLORS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::new(colors, DEFAULT_FALLBACK_COLOR)
    }

    /// Assign a color and return self for chaining
    pub fn with_color(mut self, category: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(category.into(), color.into());
        self
    }

    /// Replace the fallback color and return self for chaining
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Assigned color, if any
    pub fn get(&self, category: &str) -> Option<&str> {
        self.colors.get(category).map(String::as_str)
    }

    /// Assigned color or the fallback
    pub fn color_for(&self, category: &str) -> &str {
        self.get(category).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Ribbon color: links out of the root take the target's color, all
    /// others take the source's.
    pub fn link_color(&self, graph: &FlowGraph, link: &FlowLink) -> &str {
        let key = if link.source == 0 {
            link.target
        } else {
            link.source
        };
        graph
            .node_name(key)
            .map(|name| self.color_for(name))
            .unwrap_or(&self.fallback)
    }

    /// Node fill color. `bucket_count` trailing nodes are treated as
    /// threshold buckets and colored from `bucket_colors` in order.
    pub fn node_color<'a>(
        &'a self,
        graph: &FlowGraph,
        index: usize,
        bucket_count: usize,
        bucket_colors: &'a [String],
    ) -> &'a str {
        let Some(name) = graph.node_name(index) else {
            return UNKNOWN_NODE_COLOR;
        };
        if index == 0 {
            return ROOT_COLOR;
        }
        if let Some(color) = self.get(name) {
            return color;
        }
        let first_bucket = graph.nodes.len().saturating_sub(bucket_count);
        if index >= first_bucket && !bucket_colors.is_empty() {
            return &bucket_colors[(index - first_bucket) % bucket_colors.len()];
        }
        UNKNOWN_NODE_COLOR
    }
}

/// Default bucket colors as owned strings
pub fn default_bucket_colors() -> Vec<String> {
    DEFAULT_BUCKET_COLORS.iter().map(|c| c.to_string()).collect()
}
